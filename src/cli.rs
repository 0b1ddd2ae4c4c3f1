//! Command-line interface for omok.

use clap::Parser;
use std::path::PathBuf;

/// Omok — two-player grid placement at the terminal
#[derive(Parser, Debug)]
#[command(name = "omok")]
#[command(about = "Play Omok in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length
    #[arg(long, default_value_t = omok::GameSession::DEFAULT_SIZE as u16, value_parser = clap::value_parser!(u16).range(2..=50))]
    pub size: u16,

    /// Log file path (stderr would corrupt the alternate screen)
    #[arg(long, default_value = "omok_tui.log")]
    pub log_file: PathBuf,
}
