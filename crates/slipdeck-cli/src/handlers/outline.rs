use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::loader;
use crate::presentation::text::render_outline;

pub fn run(deck_path: &Path) -> Result<()> {
    let deck = loader::load_or_fallback(deck_path)?;
    let colored = std::io::stdout().is_terminal();
    print!("{}", render_outline(&deck, colored));
    Ok(())
}
