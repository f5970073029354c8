//! The `memesmith suggest` command.

use clap::Args;
use memesmith_core::{Config, MemeSmith};

use super::types::{OutputFormat, Provider};

/// Arguments for the `suggest` command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// What the meme should be about
    #[arg(required = true)]
    pub prompt: String,

    /// Also ask the text model for a caption
    #[arg(long)]
    pub ai: bool,

    /// Text provider for --ai (defaults to llm.provider from config)
    #[arg(long, value_enum, requires = "ai")]
    pub provider: Option<Provider>,

    /// Model name (provider-specific)
    #[arg(long, requires = "ai")]
    pub model: Option<String>,

    /// Output format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the suggest command.
pub async fn execute(args: SuggestArgs, config: Config) -> anyhow::Result<()> {
    let mut writer = super::stdout_writer(args.format, args.pretty, &config);
    let mut smith = MemeSmith::new(config)?;

    if !args.ai {
        let suggestions = smith.suggest_delayed(&args.prompt).await;
        tracing::info!("{} suggestions for {:?}", suggestions.len(), args.prompt);
        writer.write_suggestions(&suggestions)?;
        writer.flush()?;
        tracing::debug!("Wrote {} items", writer.items_written());
        return Ok(());
    }

    let provider = args.provider.map(|p| p.to_string());
    if let Err(e) = smith.connect(provider.as_deref(), args.model.as_deref()) {
        // The caption degrades to the fallback message; suggestions still print.
        tracing::warn!("Text provider unavailable: {e}");
    }

    let set = smith.suggest_with_caption(&args.prompt).await;
    writer.write_set(&set)?;
    writer.flush()?;
    tracing::debug!("Wrote {} items", writer.items_written());
    Ok(())
}
