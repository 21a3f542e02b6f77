use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Present a deck full-screen")]
    Present {
        /// Path to the deck document
        deck: PathBuf,

        /// 1-based slide number to start from (the shareable locator);
        /// out-of-range values fall back to the first slide
        #[arg(long)]
        start: Option<usize>,
    },

    #[command(about = "Render one slide to stdout")]
    Show {
        /// Path to the deck document
        deck: PathBuf,

        /// 1-based slide number
        #[arg(long, default_value = "1")]
        slide: usize,

        #[arg(long, default_value = "plain")]
        format: ShowFormat,

        /// Viewport height in pixels for density classification;
        /// defaults to the terminal height scaled by the cell size
        #[arg(long)]
        height: Option<f64>,
    },

    #[command(about = "List deck metadata and slides")]
    Outline {
        /// Path to the deck document
        deck: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Readable text rendering of the visual tree
    Plain,
    /// Serialized frame for machine consumers
    Json,
    /// Escaped HTML fragment
    Html,
}
