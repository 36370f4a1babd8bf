//! Fills one card's grid from the item pool.
//!
//! Items are drawn uniformly at random without replacement, then placed in
//! row-major order. When free space is active the center cell holds the free
//! label and is skipped by the draw.
//!
//! The RNG is always passed in by the caller; nothing here touches a global
//! randomness source.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::errors::CardError;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Grid dimensions, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The unique center cell, which only exists when both dimensions are odd.
    pub fn center(&self) -> Option<(usize, usize)> {
        if self.rows % 2 == 1 && self.cols % 2 == 1 {
            Some((self.rows / 2, self.cols / 2))
        } else {
            None
        }
    }
}

/// Free-space policy: a flag plus the label placed in the reserved cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSpace {
    pub enabled: bool,
    pub label: String,
}

impl FreeSpace {
    pub fn new(enabled: bool, label: impl Into<String>) -> Self {
        Self {
            enabled,
            label: label.into(),
        }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self::new(false, "FREE")
    }

    /// Returns the reserved cell for `grid`, if any.
    ///
    /// A request on a grid without a unique center (even rows or cols) is
    /// silently ignored.
    pub fn reserved_cell(&self, grid: GridSpec) -> Option<(usize, usize)> {
        if self.enabled {
            grid.center()
        } else {
            None
        }
    }

    pub fn is_free_cell(&self, grid: GridSpec, row: usize, col: usize) -> bool {
        self.reserved_cell(grid) == Some((row, col))
    }
}

/// One card: `rows × cols` cell labels stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    grid: GridSpec,
    cells: Vec<String>,
}

impl Card {
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.grid.cols + col]
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sampling
// ────────────────────────────────────────────────────────────────────────────

/// Number of cells that must be filled from the pool.
pub fn cells_needed(grid: GridSpec, free: &FreeSpace) -> usize {
    let total = grid.cell_count();
    if free.reserved_cell(grid).is_some() {
        total - 1
    } else {
        total
    }
}

/// Run-level pool size check. Returns `cells_needed` on success.
///
/// All cards in a run share the same requirement, so the driver calls this once
/// before opening the output document.
pub fn check_pool(pool_len: usize, grid: GridSpec, free: &FreeSpace) -> Result<usize, CardError> {
    let required = cells_needed(grid, free);
    if pool_len < required {
        return Err(CardError::InsufficientItems {
            required,
            available: pool_len,
            rows: grid.rows,
            cols: grid.cols,
        });
    }
    Ok(required)
}

/// Builds one card from an independent draw over `pool`.
pub fn sample_card<R: Rng + ?Sized>(
    pool: &[String],
    grid: GridSpec,
    free: &FreeSpace,
    rng: &mut R,
) -> Result<Card, CardError> {
    let needed = check_pool(pool.len(), grid, free)?;
    let reserved = free.reserved_cell(grid);

    // `index::sample` returns distinct indices in shuffled order; laid out
    // row-major they fill every cell except the reserved one.
    let mut cells: Vec<String> = Vec::with_capacity(grid.cell_count());
    cells.extend(
        index::sample(rng, pool.len(), needed)
            .into_iter()
            .map(|idx| pool[idx].clone()),
    );
    if let Some((r, c)) = reserved {
        cells.insert(r * grid.cols + c, free.label.clone());
    }

    debug!(
        rows = grid.rows,
        cols = grid.cols,
        drawn = needed,
        free_space = reserved.is_some(),
        "Sampled card"
    );

    Ok(Card { grid, cells })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
