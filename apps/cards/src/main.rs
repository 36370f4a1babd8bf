mod config;
mod driver;
mod errors;
mod items;
mod layout;
mod render;
mod sampler;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Args, Config};
use crate::driver::write_pdf;
use crate::items::load_items;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the confirmation line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &args.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting bingo-cards v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_args(args)?;
    let items = load_items(&config.items_file)?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let options = &config.options;
    let output = write_pdf(&items, options, &mut rng)
        .with_context(|| format!("could not generate {} card(s)", options.cards))?;

    println!("Saved {} bingo card(s) to {}", options.cards, output.display());
    Ok(())
}
