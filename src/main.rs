//! Tictactoe - terminal front end
//!
//! Launches the terminal display surface over the headless engine.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tui::run_tui(cli.config(), &cli.log_file).await
}
