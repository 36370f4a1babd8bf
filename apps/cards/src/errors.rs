use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a card run.
///
/// Every variant is fatal and surfaced before (or instead of) writing the output
/// document. Text that cannot be shrunk to fit a cell is deliberately not an
/// error; see `layout::text_fit`.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error(
        "need at least {required} unique items to fill a {rows}x{cols} card, \
         but only {available} were provided"
    )]
    InsufficientItems {
        required: usize,
        available: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid layout file: {0}")]
    Layout(String),

    #[error("failed to write PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
