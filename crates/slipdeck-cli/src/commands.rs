use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::ViewerConfig;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = ViewerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Present { deck, start } => handlers::present::run(&deck, start, &config),
        Commands::Show {
            deck,
            slide,
            format,
            height,
        } => handlers::show::run(&deck, slide, format, height, &config),
        Commands::Outline { deck } => handlers::outline::run(&deck),
    }
}
