//! Console tic-tac-toe against an unbeatable minimax opponent.
//!
//! The human plays X and moves first by entering a cell number 1-9;
//! the computer answers as O.

mod session;

use anyhow::Result;
use clap::Parser;
use session::Session;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a computer that cannot lose.
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an unbeatable minimax opponent")]
struct Cli {
    /// Show the minimax score of every candidate cell before each computer move.
    #[arg(long)]
    explain: bool,

    /// Log search details to stderr (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr log subscriber.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session =
        Session::new(io::stdin().lock(), io::stdout().lock()).with_explain(cli.explain);
    let status = session.run()?;

    debug!(?status, board = %session.game().board(), "session ended");

    Ok(())
}
