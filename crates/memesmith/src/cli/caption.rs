//! The `memesmith caption` command.

use clap::Args;
use memesmith_core::{Config, MemeSmith};

use super::types::{OutputFormat, Provider};

/// Arguments for the `caption` command.
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Meme description, or the literal prompt with --raw
    #[arg(required = true)]
    pub prompt: String,

    /// Send the prompt as-is and fail on errors instead of printing the fallback text
    #[arg(long)]
    pub raw: bool,

    /// Text provider (defaults to llm.provider from config)
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,

    /// Model name (provider-specific)
    #[arg(long)]
    pub model: Option<String>,

    /// Output format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the caption command.
pub async fn execute(args: CaptionArgs, config: Config) -> anyhow::Result<()> {
    let mut writer = super::stdout_writer(args.format, false, &config);
    let mut smith = MemeSmith::new(config)?;
    let provider = args.provider.map(|p| p.to_string());

    let caption = if args.raw {
        smith.connect(provider.as_deref(), args.model.as_deref())?;
        smith.generate_caption(&args.prompt).await?
    } else {
        if let Err(e) = smith.connect(provider.as_deref(), args.model.as_deref()) {
            tracing::warn!("Text provider unavailable: {e}");
        }
        smith.generate_suggestion_text(&args.prompt).await
    };

    writer.write_caption(&args.prompt, &caption)?;
    writer.flush()?;
    Ok(())
}
