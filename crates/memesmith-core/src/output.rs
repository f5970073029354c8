//! Output formatting for suggestions and generated captions.
//!
//! Suggestions go out as a JSON array, JSON Lines, or a plain-text listing
//! meant for a terminal.

use crate::suggest::{Suggestion, SuggestionSet};
use serde::Serialize;
use std::io::{self, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON value
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
    /// Human-readable listing
    Text,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            "text" | "plain" => Some(Self::Text),
            _ => None,
        }
    }
}

/// A writer that renders suggestions in the chosen format.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects the JSON format.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, value).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    fn write_text(&mut self, rank: usize, suggestion: &Suggestion) -> io::Result<()> {
        if suggestion.score > 0 {
            writeln!(
                self.writer,
                "{rank}. {} [{}] (score {})",
                suggestion.name, suggestion.id, suggestion.score
            )?;
        } else {
            writeln!(self.writer, "{rank}. {} [{}]", suggestion.name, suggestion.id)?;
        }
        for line in &suggestion.texts {
            writeln!(self.writer, "   | {line}")?;
        }
        writeln!(self.writer, "   image: {}", suggestion.image)
    }

    /// Write a list of suggestions.
    ///
    /// JSON writes one array, JSONL one object per line, text a numbered listing.
    pub fn write_suggestions(&mut self, suggestions: &[Suggestion]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(suggestions)?,
            OutputFormat::JsonLines => {
                for suggestion in suggestions {
                    // JSONL is never pretty-printed (one object per line)
                    serde_json::to_writer(&mut self.writer, suggestion)
                        .map_err(io::Error::other)?;
                    writeln!(self.writer)?;
                }
            }
            OutputFormat::Text => {
                for (i, suggestion) in suggestions.iter().enumerate() {
                    self.write_text(i + 1, suggestion)?;
                }
            }
        }
        self.items_written += suggestions.len();
        Ok(())
    }

    /// Write a generated caption.
    pub fn write_caption(&mut self, prompt: &str, caption: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonLines => {
                #[derive(Serialize)]
                struct CaptionRecord<'a> {
                    prompt: &'a str,
                    caption: &'a str,
                }
                let record = CaptionRecord { prompt, caption };
                if self.format == OutputFormat::Json {
                    self.write_json(&record)?;
                } else {
                    serde_json::to_writer(&mut self.writer, &record).map_err(io::Error::other)?;
                    writeln!(self.writer)?;
                }
            }
            OutputFormat::Text => writeln!(self.writer, "{caption}")?,
        }
        self.items_written += 1;
        Ok(())
    }

    /// Write suggestions together with their generated caption.
    ///
    /// JSON writes the whole set as one object; the other formats write the
    /// suggestions followed by the caption.
    pub fn write_set(&mut self, set: &SuggestionSet) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            self.write_json(set)?;
            self.items_written += set.suggestions.len() + 1;
            return Ok(());
        }
        self.write_suggestions(&set.suggestions)?;
        self.write_caption(&set.prompt, &set.caption)
    }

    /// Get the number of items written.
    pub fn items_written(&self) -> usize {
        self.items_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
