use std::path::Path;

use anyhow::Result;
use slipdeck_engine::DeckSession;

use crate::config::ViewerConfig;
use crate::loader;
use crate::presentation::tui;

pub fn run(deck_path: &Path, start: Option<usize>, config: &ViewerConfig) -> Result<()> {
    let deck = loader::load_or_fallback(deck_path)?;
    let session = DeckSession::new(deck, start);
    tui::run(session, config)
}
