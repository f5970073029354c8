//! Suggestion records built from ranked, fallback, or popular templates.

use crate::captions::CaptionRules;
use crate::catalog::{Catalog, Template};
use crate::matcher::TemplateMatcher;
use serde::{Deserialize, Serialize};

/// Templates offered when nothing in the catalog matches the prompt.
pub const FALLBACK_IDS: [&str; 4] = [
    "drake-hotline-bling",
    "distracted-boyfriend",
    "this-is-fine",
    "success-kid",
];

/// Priority order for [`Suggester::popular`].
pub const POPULAR_IDS: [&str; 6] = [
    "drake-hotline-bling",
    "distracted-boyfriend",
    "success-kid",
    "this-is-fine",
    "matrix-morpheus",
    "two-buttons",
];

/// Default number of popular templates.
pub const DEFAULT_POPULAR_COUNT: usize = 4;

/// A template ready to render, with its final caption lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Template id
    pub id: String,

    /// Template display name
    pub name: String,

    /// Image reference
    pub image: String,

    /// Caption lines, top to bottom
    pub texts: Vec<String>,

    /// Display name of the template the suggestion is based on
    pub template: String,

    /// Relevance score (0 for fallback and popular entries)
    pub score: u32,
}

/// Suggestions for one prompt plus a model-written caption.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSet {
    pub prompt: String,
    pub suggestions: Vec<Suggestion>,
    pub caption: String,
}

impl Suggestion {
    fn from_template(template: &Template, texts: Vec<String>, score: u32) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            image: template.image.clone(),
            texts,
            template: template.name.clone(),
            score,
        }
    }
}

/// Builds suggestions from a catalog and a caption rule table.
pub struct Suggester<'a> {
    catalog: &'a Catalog,
    rules: &'a CaptionRules,
}

impl<'a> Suggester<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a CaptionRules) -> Self {
        Self { catalog, rules }
    }

    /// Ranked suggestions for `prompt`, or the fallback list when nothing matches.
    pub fn suggest(&self, prompt: &str) -> Vec<Suggestion> {
        let matches = TemplateMatcher::new(self.catalog).rank(prompt);

        if matches.is_empty() {
            tracing::debug!("No template matched, using fallback list");
            return FALLBACK_IDS
                .iter()
                .filter_map(|id| self.catalog.get(id))
                .map(|t| Suggestion::from_template(t, self.rules.synthesize(prompt, t), 0))
                .collect();
        }

        matches
            .into_iter()
            .map(|m| {
                let texts = self.rules.synthesize(prompt, m.template);
                Suggestion::from_template(m.template, texts, m.score)
            })
            .collect()
    }

    /// Up to `count` popular templates with their default captions.
    ///
    /// Ids missing from the catalog are skipped, so fewer than `count`
    /// entries may come back.
    pub fn popular(&self, count: usize) -> Vec<Suggestion> {
        POPULAR_IDS
            .iter()
            .take(count)
            .filter_map(|id| self.catalog.get(id))
            .map(|t| Suggestion::from_template(t, t.default_texts.clone(), 0))
            .collect()
    }
}
