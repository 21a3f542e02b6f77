use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slide::Slide;

/// Deck-level metadata. Every field is optional; unknown keys in the
/// document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A full presentation document: metadata plus an ordered slide list.
///
/// Decks are created once at load time and read-only for the session.
/// A deck that reaches consumers always holds at least one slide;
/// `parse` rejects empty slide lists, and no mutation API exists.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default)]
    meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    /// Parse a deck from its JSON source.
    ///
    /// A document without a `slides` key fails as a parse error; a
    /// present-but-empty slide list fails as `EmptyDeck`. Both are
    /// loader-level failures, surfaced before any navigation state
    /// exists.
    pub fn parse(input: &str) -> Result<Self> {
        let deck: Deck = serde_json::from_str(input)?;
        if deck.slides.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(deck)
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    /// Deck title for window/frame chrome, if the author set one.
    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Fails with `SlideIndexOutOfRange` for any index not in
    /// `[0, slide_count())`. Callers holding a clamped navigation
    /// index never trigger this; if it fires, it is a bug.
    pub fn slide_at(&self, index: usize) -> Result<&Slide> {
        self.slides.get(index).ok_or(Error::SlideIndexOutOfRange {
            index,
            total: self.slides.len(),
        })
    }
}
