mod commands;

pub use commands::*;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "slipdeck")]
#[command(about = "Present declarative JSON slide decks in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Viewer config file (TOML); defaults to the XDG config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
