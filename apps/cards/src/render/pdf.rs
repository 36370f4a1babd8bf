//! PDF backend built on `printpdf`, using the built-in Helvetica faces.
//!
//! The whole document is assembled in memory. The output file is created only
//! in [`PdfCardDocument::save`], so a run that fails before saving never leaves
//! a partial file behind.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use tracing::debug;

use crate::errors::CardError;
use crate::layout::{Color, FontFace, LayoutConfig, Rect, StandardMetrics, TextMeasure};
use crate::render::{CardDocument, Surface};

const MM_PER_PT: f32 = 25.4 / 72.0;
const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

fn pdf_color(color: Color) -> printpdf::Color {
    let (r, g, b) = color.to_unit();
    printpdf::Color::Rgb(Rgb::new(r, g, b, None))
}

fn corners(rect: Rect) -> Vec<(Point, bool)> {
    vec![
        (Point::new(mm(rect.x), mm(rect.y)), false),
        (Point::new(mm(rect.right()), mm(rect.y)), false),
        (Point::new(mm(rect.right()), mm(rect.top())), false),
        (Point::new(mm(rect.x), mm(rect.top())), false),
    ]
}

/// A card document backed by an in-memory `printpdf` document.
pub struct PdfCardDocument {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    page_width: f32,
    page_height: f32,
    pages: usize,
}

impl PdfCardDocument {
    pub fn new(title: &str, layout: &LayoutConfig) -> Result<Self, CardError> {
        let (doc, page1, layer1) = PdfDocument::new(
            title,
            mm(layout.page_width),
            mm(layout.page_height),
            LAYER_NAME,
        );
        let layer = doc.get_page(page1).get_layer(layer1);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| CardError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| CardError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            page_width: layout.page_width,
            page_height: layout.page_height,
            pages: 0,
        })
    }

    fn font_ref(&self, font: FontFace) -> &IndirectFontRef {
        match font {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
        }
    }

    /// Writes the document to `path`. Consumes the document; the file handle is
    /// closed before this returns.
    pub fn save(self, path: &Path) -> Result<(), CardError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let pages = self.page_count();
        self.doc
            .save(&mut writer)
            .map_err(|e| CardError::Pdf(e.to_string()))?;
        debug!(path = %path.display(), pages, "PDF written");
        Ok(())
    }
}

impl TextMeasure for PdfCardDocument {
    fn measure_text_width(&self, text: &str, font: FontFace, size: f32) -> f32 {
        // base-14 fonts are not embedded; their AFM widths are the static tables
        StandardMetrics.measure_text_width(text, font, size)
    }
}

impl Surface for PdfCardDocument {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer.add_polygon(Polygon {
            rings: vec![corners(rect)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.layer.set_outline_color(pdf_color(color));
        self.layer.set_outline_thickness(line_width);
        self.layer.add_line(Line {
            points: corners(rect),
            is_closed: true,
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
        let width = self.measure_text_width(text, font, size);
        let x = center_x - width / 2.0;
        self.layer.set_fill_color(pdf_color(color));
        self.layer
            .use_text(text, size, mm(x), mm(baseline), self.font_ref(font));
    }
}

impl CardDocument for PdfCardDocument {
    fn begin_page(&mut self) {
        // PdfDocument::new already created the first page
        if self.pages > 0 {
            let (page, layer) =
                self.doc
                    .add_page(mm(self.page_width), mm(self.page_height), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
        }
        self.pages += 1;
    }

    fn page_count(&self) -> usize {
        self.pages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
