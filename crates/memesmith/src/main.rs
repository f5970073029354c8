//! Memesmith CLI - turn a short prompt into meme template suggestions.
//!
//! Memesmith scores a catalog of meme templates against a prompt, attaches
//! caption lines, and can ask a text model to write a caption.
//!
//! # Usage
//!
//! ```bash
//! # Rank templates for a prompt
//! memesmith suggest "old way vs new way"
//!
//! # Same, plus a model-written caption
//! memesmith suggest "mondays" --ai
//!
//! # Popular templates
//! memesmith popular -n 2
//!
//! # View configuration
//! memesmith config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Memesmith - meme template suggestions and AI captions from a prompt.
#[derive(Parser, Debug)]
#[command(name = "memesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggest meme templates for a prompt
    Suggest(cli::suggest::SuggestArgs),

    /// Show popular templates with their default captions
    Popular(cli::popular::PopularArgs),

    /// Generate a caption with the configured text model
    Caption(cli::caption::CaptionArgs),

    /// List the templates in the active catalog
    Templates(cli::templates::TemplatesArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match memesmith_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `memesmith config path`."
            );
            memesmith_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Memesmith v{}", memesmith_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Suggest(args) => cli::suggest::execute(args, config).await,
        Commands::Popular(args) => cli::popular::execute(args, config).await,
        Commands::Caption(args) => cli::caption::execute(args, config).await,
        Commands::Templates(args) => cli::templates::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
