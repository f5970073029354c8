//! The `memesmith popular` command.

use clap::Args;
use memesmith_core::{Config, MemeSmith};

use super::types::OutputFormat;

/// Arguments for the `popular` command.
#[derive(Args, Debug)]
pub struct PopularArgs {
    /// Number of templates (defaults to suggest.popular_count from config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the popular command.
pub async fn execute(args: PopularArgs, config: Config) -> anyhow::Result<()> {
    let mut writer = super::stdout_writer(args.format, args.pretty, &config);
    let smith = MemeSmith::new(config)?;

    let popular = smith.popular(args.count);
    writer.write_suggestions(&popular)?;
    writer.flush()?;
    Ok(())
}
