//! Picks the largest font size whose wrapped text fits a cell.
//!
//! # Algorithm
//! For each candidate size, from `max_cell_font_size` down to `min_cell_font_size`:
//! 1. Estimate a wrap width in characters: `floor(width / (size * wrap_char_factor))`,
//!    never below `min_wrap_chars`.
//! 2. Greedy word-wrap the text at that width.
//! 3. Block height = `lines * size * line_spacing`.
//! 4. Accept if the block fits the height AND every line, measured at that size,
//!    fits the width.
//!
//! The first accepted size wins, so the result is always the largest fitting
//! size. When nothing fits, the minimum size is used anyway and `fits` is false;
//! overflow is a rendering degradation, not an error.

use tracing::debug;

use crate::layout::font_metrics::{FontFace, TextMeasure};
use crate::layout::geometry::Rect;
use crate::layout::page_config::LayoutConfig;
use crate::layout::wrap::wrap_words;

/// Text prepared for drawing inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub size: f32,
    pub lines: Vec<String>,
    pub line_height: f32,
    pub block_height: f32,
    /// False when the minimum-size fallback was used.
    pub fits: bool,
}

impl FittedText {
    /// Baselines for each line, top to bottom, with the block vertically
    /// centered in `area`.
    pub fn baselines(&self, area: Rect) -> impl Iterator<Item = f32> + '_ {
        let first = area.center_y() + self.block_height / 2.0 - self.line_height
            + (self.line_height - self.size) / 2.0;
        let step = self.line_height;
        (0..self.lines.len()).map(move |i| first - i as f32 * step)
    }
}

/// Candidate sizes in the order they are tried (largest first).
pub fn candidate_sizes(layout: &LayoutConfig) -> impl Iterator<Item = f32> {
    (layout.min_cell_font_size..=layout.max_cell_font_size)
        .rev()
        .map(f32::from)
}

/// Character budget per line at `size` for a text area `max_width` wide.
pub fn wrap_width_chars(max_width: f32, size: f32, layout: &LayoutConfig) -> usize {
    // negative widths (cells smaller than their padding) saturate to 0
    let estimate = (max_width / (size * layout.wrap_char_factor)).floor() as usize;
    estimate.max(layout.min_wrap_chars)
}

fn layout_at<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    font: FontFace,
    size: f32,
    max_width: f32,
    max_height: f32,
    layout: &LayoutConfig,
) -> FittedText {
    let lines = wrap_words(text, wrap_width_chars(max_width, size, layout));
    let line_height = size * layout.line_spacing;
    let block_height = lines.len() as f32 * line_height;

    let fits = block_height <= max_height
        && lines
            .iter()
            .all(|line| measure.measure_text_width(line, font, size) <= max_width);

    FittedText {
        size,
        lines,
        line_height,
        block_height,
        fits,
    }
}

/// Fits `text` into a `max_width × max_height` area.
///
/// Never fails; see the module docs for the fallback.
pub fn fit_text<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    font: FontFace,
    max_width: f32,
    max_height: f32,
    layout: &LayoutConfig,
) -> FittedText {
    for size in candidate_sizes(layout) {
        let fitted = layout_at(measure, text, font, size, max_width, max_height, layout);
        if fitted.fits {
            return fitted;
        }
    }

    let min_size = f32::from(layout.min_cell_font_size);
    debug!(
        text,
        size = min_size,
        max_width,
        max_height,
        "Cell text does not fit at any size; using minimum"
    );
    layout_at(measure, text, font, min_size, max_width, max_height, layout)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
