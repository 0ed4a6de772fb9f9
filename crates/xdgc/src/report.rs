//! Terminal output: verbose traces on stderr and JSON payloads on stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::ffi::OsStr;
use std::io::{self, Write};
use xdgc_core::{Resolution, SearchPath, Source};

/// Writes diagnostics to stderr when verbose output is enabled.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Explain which rule produced `resolution`.
    pub fn trace(&self, resolution: &Resolution) {
        if !self.verbose {
            return;
        }
        let category = resolution.category;
        let var = category.override_var();
        let line = match resolution.source {
            Source::Override { var } => format!("{category}: {var} is set"),
            Source::HomeDefault { suffix } => {
                format!("{category}: {var} unset, using $HOME/{suffix}")
            }
            Source::PlatformHome { suffix } => {
                format!("{category}: {var} and HOME unset, using OS home + {suffix}")
            }
        };
        eprintln!("{}", line.dimmed());
    }

    /// Explain where a search path value came from.
    pub fn trace_search_path(&self, kind: SearchPath, from_env: bool) {
        if !self.verbose {
            return;
        }
        let var = kind.var();
        let line = if from_env {
            format!("{kind}: {var} is set")
        } else {
            format!("{kind}: {var} unset, using default")
        };
        eprintln!("{}", line.dimmed());
    }
}

/// One directory in `get --format json`.
#[derive(Debug, Serialize)]
pub struct DirJson {
    pub category: &'static str,
    pub variable: &'static str,
    pub path: String,
}

/// One row of `list --format json`.
#[derive(Debug, Serialize)]
pub struct ListEntryJson {
    pub category: &'static str,
    pub variable: &'static str,
    pub path: Option<String>,
    pub error: Option<String>,
}

/// `search-path --format json`.
#[derive(Debug, Serialize)]
pub struct SearchPathJson {
    pub variable: &'static str,
    pub value: String,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Print a path or variable value as-is, followed by a newline.
pub fn print_raw(value: &OsStr) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(value.as_encoded_bytes())
        .context("Failed to write to stdout")?;
    stdout.write_all(b"\n").context("Failed to write to stdout")
}
