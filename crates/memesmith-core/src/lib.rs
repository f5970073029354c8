//! Memesmith Core - meme template matching and caption generation.
//!
//! Memesmith turns a short text prompt into meme suggestions: it scores a
//! catalog of templates by keyword overlap with the prompt, attaches
//! contextual caption lines, and can ask a remote text model for a caption.
//!
//! # Architecture
//!
//! ```text
//! Prompt → Score templates → Rank (top 6) → Caption rules → Suggestions
//!        ↘ Text provider (Gemini / Ollama) → Generated caption
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use memesmith_core::{Config, MemeSmith};
//!
//! #[tokio::main]
//! async fn main() -> memesmith_core::Result<()> {
//!     let smith = MemeSmith::new(Config::load()?)?;
//!
//!     for suggestion in smith.suggest("old way vs new way") {
//!         println!("{}: {:?}", suggestion.name, suggestion.texts);
//!     }
//!     println!("{}", smith.generate_suggestion_text("mondays").await);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod captions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod matcher;
pub mod output;
pub mod suggest;

// Re-exports for convenient access
pub use captions::{synthesize_captions, CaptionRule, CaptionRules, RuleInput};
pub use catalog::{Catalog, Template};
pub use config::Config;
pub use error::{CatalogError, ConfigError, GenerationError, MemeError, Result};
pub use llm::{CaptionGenerator, TextProvider, TextProviderFactory, FALLBACK_CAPTION};
pub use matcher::{ScoredTemplate, TemplateMatcher, MAX_MATCHES};
pub use output::{OutputFormat, OutputWriter};
pub use suggest::{Suggester, Suggestion, SuggestionSet};

use std::time::Duration;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score every built-in template against `prompt`.
pub fn score_templates(prompt: &str) -> Vec<ScoredTemplate<'static>> {
    matcher::score_templates(Catalog::builtin(), prompt)
}

/// Rank the built-in templates for `prompt`.
pub fn rank(prompt: &str) -> Vec<ScoredTemplate<'static>> {
    matcher::rank(Catalog::builtin(), prompt)
}

/// Suggestions from the built-in catalog and caption rules.
pub fn suggest(prompt: &str) -> Vec<Suggestion> {
    let rules = CaptionRules::builtin();
    Suggester::new(Catalog::builtin(), &rules).suggest(prompt)
}

/// Popular built-in templates with their default captions.
pub fn popular(count: usize) -> Vec<Suggestion> {
    let rules = CaptionRules::empty();
    Suggester::new(Catalog::builtin(), &rules).popular(count)
}

/// Memesmith - the main entry point tying catalog, rules, and generation together.
pub struct MemeSmith {
    config: Config,
    catalog: Catalog,
    rules: CaptionRules,
    generator: Option<CaptionGenerator>,
    /// Provider and model asked for by the last [`MemeSmith::connect`]
    requested: Option<(String, Option<String>)>,
}

impl MemeSmith {
    /// Create an instance from configuration.
    ///
    /// The catalog is loaded eagerly; the text provider is built on first use
    /// unless one is injected with [`MemeSmith::with_provider`].
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!("Initializing Memesmith v{}", VERSION);
        let catalog = config.catalog()?;
        Ok(Self {
            config,
            catalog,
            rules: CaptionRules::builtin(),
            generator: None,
            requested: None,
        })
    }

    /// Use `provider` for caption generation instead of the configured one.
    pub fn with_provider(mut self, provider: Box<dyn TextProvider>) -> Self {
        self.generator = Some(CaptionGenerator::new(provider));
        self
    }

    /// Build the text provider named `provider` (or the configured default) now.
    ///
    /// The choice sticks even when building fails: later generation calls
    /// retry the same provider instead of switching to the configured one.
    pub fn connect(&mut self, provider: Option<&str>, model: Option<&str>) -> Result<()> {
        let name = provider.unwrap_or(&self.config.llm.provider).to_string();
        self.generator = None;
        self.requested = Some((name.clone(), model.map(String::from)));

        let provider = TextProviderFactory::create(&name, &self.config.llm, model)?;
        self.generator = Some(CaptionGenerator::new(provider));
        Ok(())
    }

    /// Replace the caption rule table.
    pub fn with_rules(mut self, rules: CaptionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the active catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn suggester(&self) -> Suggester<'_> {
        Suggester::new(&self.catalog, &self.rules)
    }

    /// Ranked templates for `prompt`, with scores.
    pub fn rank(&self, prompt: &str) -> Vec<ScoredTemplate<'_>> {
        TemplateMatcher::new(&self.catalog).rank(prompt)
    }

    /// Suggestions for `prompt`, falling back to a fixed list when nothing matches.
    pub fn suggest(&self, prompt: &str) -> Vec<Suggestion> {
        self.suggester().suggest(prompt)
    }

    /// Like [`MemeSmith::suggest`], after the configured `suggest.delay_ms` pause.
    pub async fn suggest_delayed(&self, prompt: &str) -> Vec<Suggestion> {
        let delay = self.config.suggest.delay_ms;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.suggest(prompt)
    }

    /// Popular templates; `None` uses `suggest.popular_count`.
    pub fn popular(&self, count: Option<usize>) -> Vec<Suggestion> {
        self.suggester()
            .popular(count.unwrap_or(self.config.suggest.popular_count))
    }

    fn generator(&self) -> std::result::Result<CaptionGenerator, GenerationError> {
        match &self.generator {
            Some(generator) => Ok(generator.clone()),
            None => {
                let (name, model) = match &self.requested {
                    Some((name, model)) => (name.as_str(), model.as_deref()),
                    None => (self.config.llm.provider.as_str(), None),
                };
                let provider = TextProviderFactory::create(name, &self.config.llm, model)?;
                Ok(CaptionGenerator::new(provider))
            }
        }
    }

    /// Send `prompt` to the text provider and return its text.
    pub async fn generate_caption(&self, prompt: &str) -> Result<String> {
        let generator = self.generator()?;
        Ok(generator.generate_caption(prompt).await?)
    }

    /// A model-written meme caption, or [`FALLBACK_CAPTION`] on any failure.
    pub async fn generate_suggestion_text(&self, description: &str) -> String {
        match self.generator() {
            Ok(generator) => generator.generate_suggestion_text(description).await,
            Err(e) => {
                tracing::warn!("Caption generation unavailable: {e}");
                FALLBACK_CAPTION.to_string()
            }
        }
    }

    /// Delayed suggestions together with a generated caption.
    pub async fn suggest_with_caption(&self, prompt: &str) -> SuggestionSet {
        let (suggestions, caption) = tokio::join!(
            self.suggest_delayed(prompt),
            self.generate_suggestion_text(prompt)
        );
        SuggestionSet {
            prompt: prompt.to_string(),
            suggestions,
            caption,
        }
    }
}
