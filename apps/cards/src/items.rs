//! Item pool loading.
//!
//! One item per line. Leading/trailing whitespace is trimmed, blank lines are
//! dropped and lines starting with `#` are comments. Order is preserved and
//! duplicates are kept as-is.

use std::path::Path;

use tracing::{debug, info};

use crate::errors::CardError;

const COMMENT_MARKER: char = '#';

/// Reads the item pool from `path`.
///
/// A missing file is reported as [`CardError::SourceNotFound`] so the caller can
/// fail before any output is produced.
pub fn load_items(path: &Path) -> Result<Vec<String>, CardError> {
    if !path.exists() {
        return Err(CardError::SourceNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let items = parse_items(&content);
    info!(path = %path.display(), count = items.len(), "Loaded item pool");
    Ok(items)
}

/// Splits raw file content into pool items.
pub fn parse_items(content: &str) -> Vec<String> {
    let mut items = Vec::new();
    for line in content.lines() {
        let line = line.trim();

        // skip empty lines and comments:
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        items.push(line.to_string());
    }
    debug!(count = items.len(), "Parsed items");
    items
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
