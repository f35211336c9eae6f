//! Terminal blackjack table.

mod table;

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use blackjack21::{EngineOptions, ExhaustedDeckPolicy, GameEngine};
use clap::Parser;

use table::Table;

/// Command-line options for the table.
#[derive(Parser, Debug, Clone)]
#[command(name = "blackjack21", version, about = "Single-player blackjack in the terminal")]
struct Cli {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer keeps drawing below this total
    #[arg(long, default_value_t = 17)]
    dealer_stands_at: u8,

    /// Minimum cards left in the deck before a round is dealt
    #[arg(long, default_value_t = 4)]
    min_cards: usize,

    /// Refuse to deal from a short deck instead of rebuilding it
    #[arg(long, default_value_t = false)]
    reject_short_deck: bool,

    /// Stand is only offered when the player's total is above this
    #[arg(long, default_value_t = 11)]
    min_stand_total: u8,

    /// Disable ANSI colors
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn engine_options(&self) -> EngineOptions {
        let policy = if self.reject_short_deck {
            ExhaustedDeckPolicy::Reject
        } else {
            ExhaustedDeckPolicy::Rebuild
        };

        EngineOptions::default()
            .with_dealer_stands_at(self.dealer_stands_at)
            .with_min_cards_to_deal(self.min_cards)
            .with_exhausted_deck(policy)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the table.
    let log_filter = if cli.debug { "debug" } else { "blackjack21=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(cli.debug)
        .init();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let engine = GameEngine::new(cli.engine_options(), seed);
    tracing::info!(seed, options = ?engine.options(), "opening table");

    let mut table = Table::new(engine, cli.min_stand_total, !cli.no_color);

    table.run(io::stdin().lock(), io::stdout().lock())
}
