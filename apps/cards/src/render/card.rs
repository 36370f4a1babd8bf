//! Draws one card onto the current page of a [`Surface`].
//!
//! Draw order per page: title, footer, then each cell row-major as
//! (free-space fill) → border → text lines. The fill always precedes the
//! border so the highlight never covers the grid line.

use crate::layout::{fit_text, FontFace, LayoutConfig, PageGeometry, Rect};
use crate::render::Surface;
use crate::sampler::{Card, FreeSpace};

/// Footer label for the 1-based `card_number`.
pub fn footer_label(card_number: usize) -> String {
    format!("Card #{card_number}")
}

/// Draws `card` with its title band and "Card #N" footer.
///
/// Never fails: text that cannot be fitted is drawn at the minimum size.
pub fn render_card<S: Surface + ?Sized>(
    surface: &mut S,
    card: &Card,
    card_number: usize,
    title: &str,
    free: &FreeSpace,
    layout: &LayoutConfig,
) {
    let geometry = PageGeometry::compute(layout, card.grid());

    surface.draw_text_centered(
        title,
        FontFace::HelveticaBold,
        layout.title_font_size,
        geometry.center_x,
        geometry.title_baseline,
        layout.header_color,
    );
    surface.draw_text_centered(
        &footer_label(card_number),
        FontFace::Helvetica,
        layout.footer_font_size,
        geometry.center_x,
        geometry.footer_baseline,
        layout.header_color,
    );

    for (r, c, rect) in geometry.cells() {
        let is_free = free.is_free_cell(card.grid(), r, c);
        if is_free {
            surface.fill_rect(rect, layout.free_space_background);
        }
        surface.stroke_rect(rect, layout.grid_line_color, layout.grid_line_width);
        draw_cell_text(surface, card.get(r, c), rect, is_free, layout);
    }
}

fn draw_cell_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    cell: Rect,
    bold: bool,
    layout: &LayoutConfig,
) {
    let area = cell.inset(layout.cell_padding);
    let font = FontFace::regular_or_bold(bold);
    let fitted = fit_text(&*surface, text, font, area.width, area.height, layout);

    for (line, baseline) in fitted.lines.iter().zip(fitted.baselines(area)) {
        surface.draw_text_centered(
            line,
            font,
            fitted.size,
            area.center_x(),
            baseline,
            layout.cell_text_color,
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{StandardMetrics, TextMeasure};
    use crate::render::recorder::{DrawOp, RecordingDocument};
    use crate::render::CardDocument;
    use crate::sampler::{sample_card, GridSpec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Event number {i}")).collect()
    }

    fn make_card(rows: usize, cols: usize, free: &FreeSpace) -> Card {
        let pool = make_pool(rows * cols);
        sample_card(&pool, GridSpec::new(rows, cols), free, &mut StdRng::seed_from_u64(17)).unwrap()
    }

    fn render_one(card: &Card, free: &FreeSpace) -> RecordingDocument {
        let mut doc = RecordingDocument::new();
        doc.begin_page();
        render_card(&mut doc, card, 1, "BINGO", free, &LayoutConfig::default());
        doc
    }

    /// Splits a page's ops into per-cell groups, each starting at a border stroke.
    fn cell_ops(ops: &[DrawOp]) -> Vec<Vec<DrawOp>> {
        let mut cells: Vec<Vec<DrawOp>> = Vec::new();
        let mut pending_fill: Option<DrawOp> = None;
        for op in ops {
            match op {
                DrawOp::Fill { .. } => pending_fill = Some(op.clone()),
                DrawOp::Stroke { .. } => {
                    let mut cell = Vec::new();
                    if let Some(fill) = pending_fill.take() {
                        cell.push(fill);
                    }
                    cell.push(op.clone());
                    cells.push(cell);
                }
                DrawOp::Text { .. } => {
                    if let Some(cell) = cells.last_mut() {
                        cell.push(op.clone());
                    }
                }
            }
        }
        cells
    }

    fn cell_text(ops: &[DrawOp]) -> String {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ── title / footer ──────────────────────────────────────────────────────

    #[test]
    fn test_footer_label_format() {
        assert_eq!(footer_label(1), "Card #1");
        assert_eq!(footer_label(12), "Card #12");
    }

    #[test]
    fn test_title_and_footer_drawn_first() {
        let card = make_card(3, 3, &FreeSpace::disabled());
        let mut doc = RecordingDocument::new();
        doc.begin_page();
        render_card(&mut doc, &card, 7, "Movie Night Bingo", &FreeSpace::disabled(), &LayoutConfig::default());

        let texts = doc.texts(0);
        assert_eq!(texts[0], "Movie Night Bingo");
        assert_eq!(texts[1], "Card #7");

        match &doc.pages[0][0] {
            DrawOp::Text { font, size, center_x, .. } => {
                assert_eq!(*font, FontFace::HelveticaBold);
                assert_eq!(*size, 28.0);
                assert_eq!(*center_x, 306.0);
            }
            other => panic!("expected title text, got {other:?}"),
        }
    }

    // ── cells ───────────────────────────────────────────────────────────────

    #[test]
    fn test_every_cell_gets_a_border_and_its_text() {
        let free = FreeSpace::disabled();
        let card = make_card(4, 5, &free);
        let doc = render_one(&card, &free);

        let strokes = doc.strokes(0);
        assert_eq!(strokes.len(), 20);
        assert!(doc.fills(0).is_empty(), "no free space -> no fill");

        let cells = cell_ops(&doc.pages[0]);
        assert_eq!(cells.len(), 20);
        for (i, ops) in cells.iter().enumerate() {
            let (r, c) = (i / 5, i % 5);
            assert_eq!(cell_text(ops), card.get(r, c), "cell ({r},{c})");
        }
    }

    #[test]
    fn test_borders_match_geometry() {
        let free = FreeSpace::disabled();
        let card = make_card(3, 4, &free);
        let doc = render_one(&card, &free);
        let geometry = PageGeometry::compute(&LayoutConfig::default(), GridSpec::new(3, 4));

        let expected: Vec<Rect> = geometry.cells().map(|(_, _, rect)| rect).collect();
        assert_eq!(doc.strokes(0), expected);
    }

    #[test]
    fn test_free_cell_filled_before_border_and_bold() {
        let free = FreeSpace::new(true, "FREE");
        let card = make_card(5, 5, &free);
        let doc = render_one(&card, &free);
        let layout = LayoutConfig::default();

        let fills = doc.fills(0);
        assert_eq!(fills.len(), 1);
        let geometry = PageGeometry::compute(&layout, GridSpec::new(5, 5));
        assert_eq!(fills[0], geometry.cell_rect(2, 2));

        let cells = cell_ops(&doc.pages[0]);
        let center = &cells[12];
        assert!(matches!(center[0], DrawOp::Fill { color, .. } if color == layout.free_space_background));
        assert!(matches!(center[1], DrawOp::Stroke { rect, .. } if rect == fills[0]));
        assert_eq!(cell_text(center), "FREE");
        for op in &center[2..] {
            assert!(matches!(op, DrawOp::Text { font: FontFace::HelveticaBold, .. }));
        }

        // every other cell is regular weight
        for (i, ops) in cells.iter().enumerate().filter(|(i, _)| *i != 12) {
            for op in ops {
                if let DrawOp::Text { font, .. } = op {
                    assert_eq!(*font, FontFace::Helvetica, "cell {i} should be regular");
                }
            }
        }
    }

    #[test]
    fn test_free_space_not_highlighted_on_even_grid() {
        let free = FreeSpace::new(true, "FREE");
        let card = make_card(4, 4, &free);
        let doc = render_one(&card, &free);
        assert!(doc.fills(0).is_empty());
        assert!(!doc.texts(0).contains(&"FREE"));
    }

    #[test]
    fn test_cell_text_centered_inside_cell() {
        let free = FreeSpace::disabled();
        let card = make_card(5, 5, &free);
        let doc = render_one(&card, &free);
        let layout = LayoutConfig::default();

        for ops in cell_ops(&doc.pages[0]) {
            let rect = match ops[0] {
                DrawOp::Stroke { rect, .. } => rect,
                _ => unreachable!("cells start with their border"),
            };
            let area = rect.inset(layout.cell_padding);
            for op in &ops[1..] {
                if let DrawOp::Text { text, font, size, center_x, baseline, .. } = op {
                    assert!((center_x - rect.center_x()).abs() < 1e-3);
                    assert!(*baseline > area.y && *baseline < area.top(), "baseline {baseline} outside cell");
                    let w = StandardMetrics.measure_text_width(text, *font, *size);
                    assert!(w <= area.width + 1e-3, "{text:?} overflows ({w} > {})", area.width);
                }
            }
        }
    }

    #[test]
    fn test_overlong_item_still_rendered() {
        let free = FreeSpace::disabled();
        let pool = vec!["Z".repeat(400)];
        let card = sample_card(&pool, GridSpec::new(1, 1), &free, &mut StdRng::seed_from_u64(0)).unwrap();
        let doc = render_one(&card, &free);

        let cells = cell_ops(&doc.pages[0]);
        assert_eq!(cells.len(), 1);
        assert_eq!(cell_text(&cells[0]).replace(' ', ""), "Z".repeat(400));
    }
}
