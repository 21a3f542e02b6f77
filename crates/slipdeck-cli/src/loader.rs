//! Deck loading: the one place load failures surface.
//!
//! A failed read or parse never reaches navigation or rendering; the
//! caller gets a static instructional fallback plus the underlying
//! error, and no session is created.

use std::path::Path;

use anyhow::{Context, Result};
use slipdeck_types::Deck;

/// Shown in place of the deck when loading fails.
pub const LOAD_FALLBACK: &str = r#"Could not load the deck.

slipdeck expects a JSON document shaped like:

  {
    "meta": { "title": "My Deck" },
    "slides": [
      { "type": "title", "headline": "Hello" },
      { "type": "content", "headline": "One idea", "bullets": ["point"] }
    ]
  }

Check that the path is correct and the file is valid JSON with a
non-empty "slides" array, then try again."#;

pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;
    let deck = Deck::parse(&content)
        .with_context(|| format!("failed to parse deck file: {}", path.display()))?;
    Ok(deck)
}

/// Load a deck, printing the instructional fallback view on failure
/// before propagating the error.
pub fn load_or_fallback(path: &Path) -> Result<Deck> {
    load_deck(path).inspect_err(|_| {
        eprintln!("{}", LOAD_FALLBACK);
    })
}
