//! Command-line interface for the terminal game.

use std::path::PathBuf;

use clap::Parser;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with player names and symbols
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the trace log
    #[arg(long, default_value = "tictactoe_mvc.log")]
    pub log_file: PathBuf,
}
