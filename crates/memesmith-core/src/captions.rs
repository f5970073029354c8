//! Contextual caption synthesis.
//!
//! Each template id maps to an ordered list of rules. A rule inspects the
//! prompt and either produces caption lines or passes. The first rule that
//! produces lines wins; otherwise the template's default captions are used.

use crate::catalog::Template;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Captions used when a template has no defaults of its own.
pub const PLACEHOLDER_CAPTIONS: [&str; 2] = ["Top text", "Bottom text"];

/// Prompt handed to a caption rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// The prompt exactly as the user typed it
    pub prompt: &'a str,
    /// Lower-cased prompt for substring checks
    pub lower: &'a str,
}

impl RuleInput<'_> {
    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }
}

/// A pure caption rule: `Some(lines)` to override, `None` to pass.
pub type CaptionRule = fn(RuleInput<'_>) -> Option<Vec<String>>;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn drake_old_new(input: RuleInput<'_>) -> Option<Vec<String>> {
    input
        .contains_any(&["old", "new"])
        .then(|| lines(&["Old way", "New way"]))
}

fn drake_bad_good(input: RuleInput<'_>) -> Option<Vec<String>> {
    input
        .contains_any(&["bad", "good"])
        .then(|| lines(&["Bad option", "Good option"]))
}

fn distracted_by_tech(input: RuleInput<'_>) -> Option<Vec<String>> {
    input
        .contains_any(&["technology", "ai"])
        .then(|| lines(&["Me", "AI Technology", "Old Methods"]))
}

fn success_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)success|win").expect("static pattern compiles"))
}

fn success_remainder(input: RuleInput<'_>) -> Option<Vec<String>> {
    if !input.contains_any(&["success", "win"]) {
        return None;
    }
    let stripped = success_words().replace_all(input.prompt, "");
    let remainder = stripped.trim();
    let second = if remainder.is_empty() {
        "achieved goal".to_string()
    } else {
        remainder.to_string()
    };
    Some(vec!["Successfully".to_string(), second])
}

fn this_is_fine(_input: RuleInput<'_>) -> Option<Vec<String>> {
    Some(lines(&["This is fine", "Everything is under control"]))
}

fn nervous_when(input: RuleInput<'_>) -> Option<Vec<String>> {
    Some(vec![
        format!("When {}", input.prompt),
        "Makes you nervous".to_string(),
    ])
}

/// Lookup from template id to its caption rules.
#[derive(Clone, Default)]
pub struct CaptionRules {
    rules: HashMap<String, Vec<CaptionRule>>,
}

impl std::fmt::Debug for CaptionRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (id, rules) in &self.rules {
            map.entry(id, &rules.len());
        }
        map.finish()
    }
}

impl CaptionRules {
    /// An empty rule table: every template falls back to its defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rule table for the built-in catalog.
    pub fn builtin() -> Self {
        let mut rules = Self::empty();
        rules
            .register("drake-hotline-bling", drake_old_new)
            .register("drake-hotline-bling", drake_bad_good)
            .register("distracted-boyfriend", distracted_by_tech)
            .register("success-kid", success_remainder)
            .register("this-is-fine", this_is_fine)
            .register("nervous", nervous_when);
        rules
    }

    /// Append a rule for `id`. Earlier rules take precedence.
    pub fn register(&mut self, id: &str, rule: CaptionRule) -> &mut Self {
        self.rules.entry(id.to_string()).or_default().push(rule);
        self
    }

    /// Number of templates that have at least one rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Produce caption lines for `template` given the user's prompt.
    pub fn synthesize(&self, prompt: &str, template: &Template) -> Vec<String> {
        let lower = prompt.to_lowercase();
        let input = RuleInput {
            prompt,
            lower: &lower,
        };

        let overridden = self
            .rules
            .get(&template.id)
            .and_then(|rules| rules.iter().find_map(|rule| rule(input)));
        if let Some(captions) = overridden {
            return captions;
        }

        if template.default_texts.is_empty() {
            lines(&PLACEHOLDER_CAPTIONS)
        } else {
            template.default_texts.clone()
        }
    }
}

/// Synthesize captions using the built-in rule table.
pub fn synthesize_captions(prompt: &str, template: &Template) -> Vec<String> {
    static BUILTIN: OnceLock<CaptionRules> = OnceLock::new();
    BUILTIN
        .get_or_init(CaptionRules::builtin)
        .synthesize(prompt, template)
}
