//! Drawing seam between the card renderer and a concrete document backend.
//!
//! The renderer only ever talks to [`Surface`]; the driver additionally needs
//! [`CardDocument`] to start pages. `pdf` is the production backend.

pub mod card;
pub mod pdf;

#[cfg(test)]
pub(crate) mod recorder;

use crate::layout::{Color, FontFace, Rect, TextMeasure};

pub use card::render_card;
pub use pdf::PdfCardDocument;

/// The current page of an output document.
///
/// Implementors must also measure text, since text fitting needs widths in
/// the same units the surface draws in.
pub trait Surface: TextMeasure {
    /// Fills `rect` with `color`, no outline.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outlines `rect`, no fill.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    /// Draws one line of text horizontally centered on `center_x`, with its
    /// baseline at `baseline`.
    fn draw_text_centered(
        &mut self,
        text: &str,
        font: FontFace,
        size: f32,
        center_x: f32,
        baseline: f32,
        color: Color,
    );
}

/// A paginated document that cards are drawn into.
pub trait CardDocument: Surface {
    /// Starts a new page; subsequent drawing lands on it.
    fn begin_page(&mut self);

    /// Pages started so far.
    fn page_count(&self) -> usize;
}
