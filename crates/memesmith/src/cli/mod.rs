//! Command handlers for the `memesmith` binary.

pub mod caption;
pub mod config;
pub mod popular;
pub mod suggest;
pub mod templates;
pub mod types;

use memesmith_core::{OutputFormat as CoreOutputFormat, OutputWriter};
use std::io::{self, BufWriter, Stdout};

use types::OutputFormat;

/// Build a stdout writer, preferring the CLI flag over the configured format.
pub(crate) fn stdout_writer(
    flag: Option<OutputFormat>,
    pretty_flag: bool,
    config: &memesmith_core::Config,
) -> OutputWriter<BufWriter<Stdout>> {
    let format = flag
        .map(CoreOutputFormat::from)
        .or_else(|| CoreOutputFormat::parse(&config.output.format))
        .unwrap_or(CoreOutputFormat::Text);
    let pretty = pretty_flag || config.output.pretty;
    OutputWriter::new(BufWriter::new(io::stdout()), format, pretty)
}
