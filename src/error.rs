// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between fetching a stats page and writing
/// its row. Optional page regions (upcoming/prior containers) are *not*
/// errors — they extract as empty sets. These variants cover required
/// structure and the I/O edges.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("expected element not found: {selector}")]
    MissingElement { selector: String },

    #[error("missing or unparseable field: {field}")]
    MissingField { field: String },

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("failed to load roster {path}: {message}")]
    Roster { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}
