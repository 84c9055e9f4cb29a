//! Commit history layer.
//!
//! Everything downstream works on a plain list of [`HistoryEntry`] values,
//! most-recent first. Where they come from is hidden here: either a git
//! repository read through `git2` (see `git2_backend`), or pre-rendered
//! `git log --pretty=format:%h,%ae` text (see `log_text`).

mod git2_backend;
mod log_text;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub use log_text::parse_log;

/// Contract violations in history data. These abort the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("malformed history line (expected `<hash>,<email>`): {line:?}")]
    MissingSeparator { line: String },
    #[error("short hash {hash:?} needs at least 6 hex digits")]
    MalformedHash { hash: String },
    #[error("repository at {path} has no commits yet")]
    EmptyRepository { path: String },
}

/// One commit: its abbreviated id and author email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub short_hash: String,
    pub author_email: String,
}

impl HistoryEntry {
    pub fn new(short_hash: impl Into<String>, author_email: impl Into<String>) -> Self {
        Self {
            short_hash: short_hash.into(),
            author_email: author_email.into(),
        }
    }

    /// The local part of the author email (text before `@`).
    pub fn handle(&self) -> &str {
        self.author_email
            .split_once('@')
            .map_or(self.author_email.as_str(), |(local, _)| local)
    }
}

/// A loaded history plus an optional display name (`owner/repo`).
#[derive(Debug, Clone, Default)]
pub struct History {
    pub name: Option<String>,
    pub entries: Vec<HistoryEntry>,
}

/// Where to read history from.
#[derive(Debug, Clone)]
pub enum HistorySource {
    /// A git repository; the path may point anywhere inside the work tree.
    Repository(PathBuf),
    /// `%h,%ae` log text from a file.
    LogFile(PathBuf),
    /// `%h,%ae` log text piped on stdin.
    Stdin,
}

impl HistorySource {
    /// Map the CLI's `--repo` / `--log` pair onto a source. `--log -` reads stdin.
    pub fn from_args(repo: Option<PathBuf>, log: Option<PathBuf>) -> Self {
        match log {
            Some(p) if p.as_os_str() == "-" => HistorySource::Stdin,
            Some(p) => HistorySource::LogFile(p),
            None => HistorySource::Repository(repo.unwrap_or_else(|| PathBuf::from("."))),
        }
    }
}

/// Load history from the given source.
///
/// # Errors
/// - The repository cannot be opened or has no commits.
/// - The log text cannot be read, or a line lacks the `,` separator.
pub fn load_history(source: &HistorySource) -> Result<History> {
    let history = match source {
        HistorySource::Repository(path) => git2_backend::read_history(path)?,
        HistorySource::LogFile(path) => {
            let txt = fs::read_to_string(path)
                .with_context(|| format!("failed to read log file {}", path.display()))?;
            History {
                name: None,
                entries: parse_log(&txt)?,
            }
        }
        HistorySource::Stdin => {
            let mut txt = String::new();
            io::stdin()
                .read_to_string(&mut txt)
                .context("failed to read log text from stdin")?;
            History {
                name: None,
                entries: parse_log(&txt)?,
            }
        }
    };
    debug!(
        entries = history.entries.len(),
        name = history.name.as_deref().unwrap_or("-"),
        "history loaded"
    );
    Ok(history)
}
