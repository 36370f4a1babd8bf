//! Samples, renders and paginates a run of cards.
//!
//! The pool size check runs once, before anything is drawn or any file is
//! opened. Card numbers are 1-based and match the "Card #N" footer of the page
//! they are drawn on.

use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info};

use crate::errors::CardError;
use crate::layout::LayoutConfig;
use crate::render::{render_card, CardDocument, PdfCardDocument};
use crate::sampler::{check_pool, sample_card, FreeSpace, GridSpec};

/// Parameters shared by every card of a run.
#[derive(Debug, Clone)]
pub struct CardOptions {
    pub grid: GridSpec,
    pub cards: usize,
    pub title: String,
    pub free_space: FreeSpace,
    pub output: PathBuf,
    pub layout: LayoutConfig,
}

/// Draws `options.cards` cards into `doc`, one page each. Returns the number of
/// cards drawn.
pub fn generate_cards<D, R>(
    doc: &mut D,
    pool: &[String],
    options: &CardOptions,
    rng: &mut R,
) -> Result<usize, CardError>
where
    D: CardDocument + ?Sized,
    R: Rng + ?Sized,
{
    let needed = check_pool(pool.len(), options.grid, &options.free_space)?;
    if options.free_space.enabled && options.free_space.reserved_cell(options.grid).is_none() {
        debug!(
            rows = options.grid.rows,
            cols = options.grid.cols,
            "Free space requested but grid has no center cell; ignoring"
        );
    }

    for card_number in 1..=options.cards {
        let card = sample_card(pool, options.grid, &options.free_space, rng)?;
        doc.begin_page();
        render_card(
            doc,
            &card,
            card_number,
            &options.title,
            &options.free_space,
            &options.layout,
        );
        debug!(card_number, cells = needed, "Rendered card");
    }

    Ok(options.cards)
}

/// Renders every card into a PDF and writes it to `options.output`.
///
/// Fails with [`CardError::InsufficientItems`] before the document exists when
/// the pool is too small.
pub fn write_pdf<R: Rng + ?Sized>(
    pool: &[String],
    options: &CardOptions,
    rng: &mut R,
) -> Result<PathBuf, CardError> {
    check_pool(pool.len(), options.grid, &options.free_space)?;

    info!(
        cards = options.cards,
        rows = options.grid.rows,
        cols = options.grid.cols,
        pool = pool.len(),
        "Generating cards"
    );

    let mut doc = PdfCardDocument::new(&options.title, &options.layout)?;
    let drawn = generate_cards(&mut doc, pool, options, rng)?;
    doc.save(&options.output)?;

    info!(cards = drawn, output = %options.output.display(), "Cards saved");
    Ok(options.output.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
