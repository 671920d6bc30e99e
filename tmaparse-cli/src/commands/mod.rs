//! Subcommand implementations and the input/output plumbing they share

pub mod init_data;
pub mod launch_params;
pub mod theme_params;

use anyhow::{bail, Context, Result};
use colored::*;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use tmaparse_core::TransformError;
use tracing::{info, warn};

/// Where a command reads its raw value from
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// Raw value given on the command line (`-` means stdin)
    pub raw: Option<&'a str>,
    /// File to read the raw value from (`-` means stdin)
    pub input: Option<&'a str>,
}

impl<'a> Source<'a> {
    /// Raw value passed directly
    pub fn raw(raw: &'a str) -> Self {
        Self {
            raw: Some(raw),
            input: None,
        }
    }

    /// Raw value read from a file
    pub fn file(path: &'a str) -> Self {
        Self {
            raw: None,
            input: Some(path),
        }
    }

    /// Resolve to the raw value. Trailing line breaks are dropped.
    pub fn read(&self) -> Result<String> {
        let data = match (self.raw, self.input) {
            (Some(_), Some(_)) => bail!("Pass either a raw value or --input, not both"),
            (Some("-"), None) | (None, Some("-")) => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
            (Some(raw), None) => raw.to_string(),
            (None, Some(path)) => {
                info!("Reading input file: {}", path);
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path))?
            }
            (None, None) => bail!("No input given: pass a raw value, --input <FILE> or -"),
        };
        Ok(data.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// How a command reports a parsed record
#[derive(Debug, Clone, Copy, Default)]
pub struct Output<'a> {
    /// Print pretty JSON instead of a summary
    pub json: bool,
    /// Write pretty JSON to this file instead of stdout
    pub file: Option<&'a str>,
}

impl Output<'_> {
    /// Emit `record`, falling back to `summary` for human output
    pub(crate) fn emit<T: Serialize>(&self, record: &T, summary: impl FnOnce(&T)) -> Result<()> {
        if let Some(path) = self.file {
            let body = serde_json::to_string_pretty(record)?;
            fs::write(path, body)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Wrote {}", path);
            println!("{} Wrote {}", "✓".green(), path);
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            summary(record);
        }
        Ok(())
    }

    /// Report a parse failure and turn it into the command's error
    pub(crate) fn reject(&self, what: &str, err: TransformError) -> anyhow::Error {
        warn!(code = err.kind().code(), "{} rejected: {}", what, err);
        if self.json {
            let body = json!({
                "error": {
                    "code": err.kind().code(),
                    "path": err.path().to_string(),
                    "message": err.to_string(),
                }
            });
            println!("{}", body);
        } else {
            println!("{} {}", "✗".red(), err);
        }
        anyhow::Error::new(err).context(format!("Invalid {}", what))
    }
}

/// Print one `label: value` summary line if the value is set
pub(crate) fn line(label: &str, value: Option<impl std::fmt::Display>) {
    if let Some(value) = value {
        println!("{:<16}{}", format!("{}:", label), value);
    }
}
