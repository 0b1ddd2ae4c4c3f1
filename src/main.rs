//! Omok — interactive terminal Omok with a chat side panel.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::run_tui(usize::from(cli.size), cli.log_file).await
}
