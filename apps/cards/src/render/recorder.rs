//! In-memory document that records draw calls per page. Test-only.

use crate::layout::{Color, FontFace, Rect, StandardMetrics, TextMeasure};
use crate::render::{CardDocument, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        color: Color,
    },
    Stroke {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    Text {
        text: String,
        font: FontFace,
        size: f32,
        center_x: f32,
        baseline: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingDocument {
    pub pages: Vec<Vec<DrawOp>>,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&mut self) -> &mut Vec<DrawOp> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// All text runs on `page`, in draw order.
    pub fn texts(&self, page: usize) -> Vec<&str> {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self, page: usize) -> Vec<Rect> {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self, page: usize) -> Vec<Rect> {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for RecordingDocument {
    fn measure_text_width(&self, text: &str, font: FontFace, size: f32) -> f32 {
        StandardMetrics.measure_text_width(text, font, size)
    }
}

impl Surface for RecordingDocument {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.current().push(DrawOp::Fill { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.current().push(DrawOp::Stroke {
            rect,
            color,
            line_width,
        });
    }

    fn draw_text_centered(
        &mut self,
        text: &str,
        font: FontFace,
        size: f32,
        center_x: f32,
        baseline: f32,
        color: Color,
    ) {
        self.current().push(DrawOp::Text {
            text: text.to_string(),
            font,
            size,
            center_x,
            baseline,
            color,
        });
    }
}

impl CardDocument for RecordingDocument {
    fn begin_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
