use std::path::{Path, PathBuf};

use clap::Parser;

use crate::driver::CardOptions;
use crate::errors::CardError;
use crate::layout::LayoutConfig;
use crate::sampler::{FreeSpace, GridSpec};

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_NUM_CARDS: usize = 10;
pub const DEFAULT_TITLE: &str = "BINGO";
pub const DEFAULT_FREE_SPACE_TEXT: &str = "FREE";
pub const DEFAULT_OUTPUT: &str = "bingo_cards.pdf";

/// Command-line arguments. Every option can also come from a `BINGO_*`
/// environment variable (a `.env` file is loaded first, if present).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a multi-page PDF of bingo cards from a plain-text list of items",
    after_help = "Examples:\n  \
        bingo-cards events.txt --rows 5 --cols 5 --cards 15 --free-space\n  \
        bingo-cards items.txt --rows 4 --cols 4 --cards 10 --title \"Movie Night Bingo\"\n  \
        bingo-cards vocab.txt --rows 3 --cols 3 --cards 8 --free-space --free-text WILD"
)]
pub struct Args {
    /// Text file with one item per line (blank lines and # comments are skipped)
    pub items_file: PathBuf,

    /// Number of rows
    #[arg(long, env = "BINGO_ROWS", default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns
    #[arg(long, env = "BINGO_COLS", default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of cards to generate, one per page
    #[arg(long, env = "BINGO_CARDS", default_value_t = DEFAULT_NUM_CARDS)]
    pub cards: usize,

    /// Title printed at the top of every card
    #[arg(long, env = "BINGO_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Reserve the center cell as a free space (odd x odd grids only)
    #[arg(long, env = "BINGO_FREE_SPACE")]
    pub free_space: bool,

    /// Free space label
    #[arg(long, env = "BINGO_FREE_TEXT", default_value = DEFAULT_FREE_SPACE_TEXT)]
    pub free_text: String,

    /// Output PDF path
    #[arg(short, long, env = "BINGO_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for reproducible cards (random when omitted)
    #[arg(long, env = "BINGO_SEED")]
    pub seed: Option<u64>,

    /// JSON file overriding page layout (margins, font sizes, colors)
    #[arg(long, env = "BINGO_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Log level for this crate when RUST_LOG is unset
    #[arg(long, env = "BINGO_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub items_file: PathBuf,
    pub seed: Option<u64>,
    pub options: CardOptions,
}

impl Config {
    /// Builds the run configuration, loading the layout override if given.
    ///
    /// Fails with `InvalidConfiguration` before anything is sampled or drawn.
    pub fn from_args(args: Args) -> Result<Self, CardError> {
        let layout = match &args.layout {
            Some(path) => load_layout(path)?,
            None => LayoutConfig::default(),
        };

        let config = Config {
            items_file: args.items_file,
            seed: args.seed,
            options: CardOptions {
                grid: GridSpec::new(args.rows, args.cols),
                cards: args.cards,
                title: args.title,
                free_space: FreeSpace::new(args.free_space, args.free_text),
                output: args.output,
                layout,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CardError> {
        let grid = self.options.grid;
        if grid.rows < 1 || grid.cols < 1 {
            return Err(CardError::InvalidConfiguration(
                "rows and columns must be at least 1".to_string(),
            ));
        }
        if grid.rows.checked_mul(grid.cols).is_none() {
            return Err(CardError::InvalidConfiguration(format!(
                "a {}x{} grid has too many cells",
                grid.rows, grid.cols
            )));
        }
        if self.options.cards < 1 {
            return Err(CardError::InvalidConfiguration(
                "must generate at least 1 card".to_string(),
            ));
        }
        self.options.layout.validate()
    }
}

/// Reads a JSON layout override file.
pub fn load_layout(path: &Path) -> Result<LayoutConfig, CardError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CardError::Layout(format!("{}: {e}", path.display())))?;
    LayoutConfig::from_json(&json)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
