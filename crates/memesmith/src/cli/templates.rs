//! The `memesmith templates` command for inspecting the active catalog.

use clap::Args;
use memesmith_core::{Config, MemeSmith};

/// Arguments for the `templates` command.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Print the catalog as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Execute the templates command.
pub async fn execute(args: TemplatesArgs, config: Config) -> anyhow::Result<()> {
    let source = config
        .catalog_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    let smith = MemeSmith::new(config)?;
    let templates = smith.catalog().templates();

    if args.json {
        println!("{}", serde_json::to_string_pretty(templates)?);
        return Ok(());
    }

    println!("Catalog: {source} ({} templates)", templates.len());
    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for template in templates {
        println!(
            "  {:<width$}  {}  [{}]",
            template.id,
            template.name,
            template.keywords.join(", ")
        );
    }
    Ok(())
}
