//! Keyword-overlap scoring of templates against a prompt.
//!
//! Every template is scored linearly: exact keyword hits, partial token/keyword
//! overlap, and a bonus when the template's display name appears verbatim.

use crate::catalog::{Catalog, Template};
use serde::Serialize;

/// Points for each keyword found anywhere in the prompt.
const KEYWORD_HIT: u32 = 10;
/// Points for each (token, keyword) pair where one contains the other.
const PARTIAL_OVERLAP: u32 = 5;
/// Points when the display name appears in the prompt.
const NAME_BONUS: u32 = 15;

/// Maximum number of templates returned by [`TemplateMatcher::rank`].
pub const MAX_MATCHES: usize = 6;

/// A template paired with its relevance score for one prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTemplate<'a> {
    pub template: &'a Template,
    pub score: u32,
}

/// Scores and ranks the templates of a catalog.
pub struct TemplateMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> TemplateMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Score a single template against an already lower-cased prompt and its tokens.
    fn score_one(template: &Template, prompt_lower: &str, tokens: &[&str]) -> u32 {
        let keywords: Vec<String> = template.keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut score = 0;

        for keyword in &keywords {
            if prompt_lower.contains(keyword.as_str()) {
                score += KEYWORD_HIT;
            }
        }

        for token in tokens {
            for keyword in &keywords {
                if keyword.contains(token) || token.contains(keyword.as_str()) {
                    score += PARTIAL_OVERLAP;
                }
            }
        }

        if prompt_lower.contains(template.name.to_lowercase().as_str()) {
            score += NAME_BONUS;
        }

        score
    }

    /// Score every template in catalog order, including zero scores.
    pub fn score_all(&self, prompt: &str) -> Vec<ScoredTemplate<'a>> {
        let prompt_lower = prompt.to_lowercase();
        let tokens: Vec<&str> = prompt_lower.split_whitespace().collect();

        self.catalog
            .templates()
            .iter()
            .map(|template| ScoredTemplate {
                template,
                score: Self::score_one(template, &prompt_lower, &tokens),
            })
            .collect()
    }

    /// Return up to [`MAX_MATCHES`] templates with a positive score, best first.
    ///
    /// The sort is stable, so equal scores keep catalog order.
    pub fn rank(&self, prompt: &str) -> Vec<ScoredTemplate<'a>> {
        let mut matches: Vec<ScoredTemplate<'a>> = self
            .score_all(prompt)
            .into_iter()
            .filter(|m| m.score > 0)
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(MAX_MATCHES);

        tracing::debug!(
            "Ranked {} templates for prompt ({} chars)",
            matches.len(),
            prompt.len()
        );
        matches
    }
}

/// Score every template of `catalog` against `prompt`.
pub fn score_templates<'a>(catalog: &'a Catalog, prompt: &str) -> Vec<ScoredTemplate<'a>> {
    TemplateMatcher::new(catalog).score_all(prompt)
}

/// Rank the templates of `catalog` for `prompt`.
pub fn rank<'a>(catalog: &'a Catalog, prompt: &str) -> Vec<ScoredTemplate<'a>> {
    TemplateMatcher::new(catalog).rank(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(matches: &[ScoredTemplate<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.template.id.as_str()).collect()
    }

    #[test]
    fn test_empty_prompt_ranks_nothing() {
        assert!(rank(Catalog::builtin(), "").is_empty());
        assert!(rank(Catalog::builtin(), "   \t ").is_empty());
    }

    #[test]
    fn test_score_all_covers_catalog() {
        let scores = score_templates(Catalog::builtin(), "anything");
        assert_eq!(scores.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_keyword_hit_and_overlap() {
        // "drake": +10 keyword hit, +5 token/keyword overlap.
        let scores = score_templates(Catalog::builtin(), "drake");
        let drake = scores
            .iter()
            .find(|m| m.template.id == "drake-hotline-bling")
            .unwrap();
        assert_eq!(drake.score, 15);
    }

    #[test]
    fn test_name_bonus() {
        // Keywords "success" and "kid" both hit (+20), both tokens overlap (+10),
        // and the name "success kid" appears verbatim (+15).
        let scores = score_templates(Catalog::builtin(), "Success Kid");
        let kid = scores.iter().find(|m| m.template.id == "success-kid").unwrap();
        assert_eq!(kid.score, 45);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = score_templates(Catalog::builtin(), "this is fine");
        let upper = score_templates(Catalog::builtin(), "THIS IS FINE");
        let a: Vec<u32> = lower.iter().map(|m| m.score).collect();
        let b: Vec<u32> = upper.iter().map(|m| m.score).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_is_capped_positive_and_sorted() {
        let prompts = [
            "a difficult choice between fire and chaos, no yes better, sweating panic",
            "one does not simply generate memes without AI",
            "laughing at my bad luck while the dog says this is fine",
            "x",
        ];
        for prompt in prompts {
            let matches = rank(Catalog::builtin(), prompt);
            assert!(matches.len() <= MAX_MATCHES, "too many for {prompt:?}");
            assert!(matches.iter().all(|m| m.score > 0));
            assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_one_does_not_simply_ranks_first() {
        let matches = rank(Catalog::builtin(), "one does not simply generate memes without AI");
        assert_eq!(matches[0].template.id, "one-does-not-simply");
        assert!(matches[0].score >= 10);
        assert!(matches[1..].iter().all(|m| m.score < matches[0].score));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // "choice" hits distracted-boyfriend, drake-hotline-bling and two-buttons equally.
        let matches = rank(Catalog::builtin(), "choice");
        assert_eq!(
            ids(&matches),
            vec!["distracted-boyfriend", "drake-hotline-bling", "two-buttons"]
        );
        assert!(matches.iter().all(|m| m.score == 15));
    }
}
