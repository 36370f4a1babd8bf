//! Page geometry: title band, footer band, and the cell grid between them.
//!
//! Coordinates follow the PDF convention: origin at the bottom-left corner of
//! the page, y grows upward. Row 0 is the top row of the grid, so row `r` sits
//! at `grid.y + (rows - 1 - r) * cell_height`.

use crate::layout::page_config::LayoutConfig;
use crate::sampler::GridSpec;

/// Axis-aligned rectangle; `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shrinks the rectangle by `padding` on all four sides.
    pub fn inset(&self, padding: f32) -> Rect {
        Rect::new(
            self.x + padding,
            self.y + padding,
            self.width - 2.0 * padding,
            self.height - 2.0 * padding,
        )
    }
}

/// Resolved positions for one card page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    /// Page minus margins.
    pub usable: Rect,
    /// Region partitioned into cells.
    pub grid: Rect,
    pub title_baseline: f32,
    pub footer_baseline: f32,
    pub center_x: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    rows: usize,
    cols: usize,
}

impl PageGeometry {
    pub fn compute(layout: &LayoutConfig, grid: GridSpec) -> Self {
        let usable = Rect::new(
            layout.margin,
            layout.margin,
            layout.page_width - 2.0 * layout.margin,
            layout.page_height - 2.0 * layout.margin,
        );

        let title_top = usable.top();
        let title_baseline = title_top - layout.title_font_size;
        let footer_baseline = usable.y;

        let grid_top = title_baseline - layout.header_gap;
        let grid_bottom = footer_baseline + layout.footer_font_size + layout.footer_gap;
        let grid_rect = Rect::new(usable.x, grid_bottom, usable.width, grid_top - grid_bottom);

        Self {
            usable,
            grid: grid_rect,
            title_baseline,
            footer_baseline,
            center_x: layout.page_width / 2.0,
            cell_width: grid_rect.width / grid.cols as f32,
            cell_height: grid_rect.height / grid.rows as f32,
            rows: grid.rows,
            cols: grid.cols,
        }
    }

    /// Rectangle of cell `(row, col)`, row 0 at the top.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.grid.x + col as f32 * self.cell_width,
            self.grid.y + (self.rows - 1 - row) as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c, self.cell_rect(r, c))))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
