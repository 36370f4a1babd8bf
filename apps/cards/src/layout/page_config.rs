//! Page layout parameters: paper size, margins, bands, fonts, colors.
//!
//! All lengths are PDF points (1/72 inch). The defaults describe US letter with
//! 0.75" margins. A JSON file can override any subset of fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CardError;

const INCH: f32 = 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Color
// ────────────────────────────────────────────────────────────────────────────

/// 8-bit RGB color, written as `#RRGGBB` in layout files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0–1.0, as PDF color operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("expected a #RRGGBB color, got {value:?}"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout configuration
// ────────────────────────────────────────────────────────────────────────────

/// Everything the renderer needs besides the card itself.
///
/// Cell font sizes are whole points; the text-fit scan walks from
/// `max_cell_font_size` down to `min_cell_font_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_font_size: f32,
    pub footer_font_size: f32,
    /// Space between the title band and the grid.
    pub header_gap: f32,
    /// Space between the grid and the footer band.
    pub footer_gap: f32,
    /// Inset on all four sides of a cell's text area.
    pub cell_padding: f32,
    pub max_cell_font_size: u16,
    pub min_cell_font_size: u16,
    /// Line height as a multiple of font size.
    pub line_spacing: f32,
    /// Approximate glyph width as a fraction of font size, used to turn the
    /// available width into a wrap width in characters.
    pub wrap_char_factor: f32,
    /// Lower bound on the wrap width in characters.
    pub min_wrap_chars: usize,
    pub grid_line_width: f32,
    pub grid_line_color: Color,
    pub free_space_background: Color,
    pub header_color: Color,
    pub cell_text_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 8.5 * INCH,
            page_height: 11.0 * INCH,
            margin: 0.75 * INCH,
            title_font_size: 28.0,
            footer_font_size: 10.0,
            header_gap: 0.35 * INCH,
            footer_gap: 0.30 * INCH,
            cell_padding: 4.0,
            max_cell_font_size: 11,
            min_cell_font_size: 6,
            line_spacing: 1.2,
            wrap_char_factor: 0.5,
            min_wrap_chars: 8,
            grid_line_width: 1.0,
            grid_line_color: Color::rgb(0x22, 0x22, 0x22),
            free_space_background: Color::rgb(0xFF, 0xF3, 0xCD),
            header_color: Color::rgb(0x1A, 0x1A, 0x2E),
            cell_text_color: Color::rgb(0x1A, 0x1A, 0x2E),
        }
    }
}

impl LayoutConfig {
    /// Parses a (possibly partial) JSON override document.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        let layout: LayoutConfig =
            serde_json::from_str(json).map_err(|e| CardError::Layout(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Rejects layouts that leave no room for the grid or have an empty font range.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.min_cell_font_size == 0 || self.min_cell_font_size > self.max_cell_font_size {
            return Err(CardError::Layout(format!(
                "cell font sizes must satisfy 0 < min ({}) <= max ({})",
                self.min_cell_font_size, self.max_cell_font_size
            )));
        }
        if self.line_spacing <= 0.0 || self.wrap_char_factor <= 0.0 {
            return Err(CardError::Layout(
                "line_spacing and wrap_char_factor must be positive".to_string(),
            ));
        }
        if self.page_width - 2.0 * self.margin <= 0.0 {
            return Err(CardError::Layout(format!(
                "margin {} leaves no usable width on a {}pt page",
                self.margin, self.page_width
            )));
        }
        let reserved = 2.0 * self.margin
            + self.title_font_size
            + self.header_gap
            + self.footer_font_size
            + self.footer_gap;
        if self.page_height - reserved <= 0.0 {
            return Err(CardError::Layout(format!(
                "title, footer and margins ({reserved}pt) leave no room for the grid"
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
