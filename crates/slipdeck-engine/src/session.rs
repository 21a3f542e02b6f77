//! Session state: deck + navigation + density, owned explicitly.
//!
//! Handlers receive a `DeckSession` and apply intents to it; nothing
//! in the engine closes over shared mutable state, so several viewer
//! instances can coexist and tests drive the machine directly.

use slipdeck_types::{Deck, Result};

use crate::density::{DensityTier, classify};
use crate::input::NavIntent;
use crate::nav::{Edge, NavOutcome, NavigationState};
use crate::render::{DeckFrame, Viewport, render_fitted};

/// What the caller should do after an intent was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    /// State changed; present the current slide again.
    Redraw,
    /// Move rejected at an edge; show transient, non-blocking feedback.
    Boundary(Edge),
    /// Nothing to do (debounced duplicate or no-op request).
    None,
}

/// One live presentation of one deck.
pub struct DeckSession {
    deck: Deck,
    nav: NavigationState,
    density: DensityTier,
}

impl DeckSession {
    /// `start_locator` is the 1-based shareable slide number; values
    /// outside the deck (or zero) fall back to the first slide.
    ///
    /// Density starts at normal; call `set_viewport_height` before the
    /// first render.
    pub fn new(deck: Deck, start_locator: Option<usize>) -> Self {
        let total = deck.slide_count();
        let start = start_locator
            .and_then(|n| n.checked_sub(1))
            .filter(|&index| index < total);
        Self {
            deck,
            nav: NavigationState::new(total, start),
            density: DensityTier::Normal,
        }
    }

    /// Apply one navigation intent. `now_ms` comes from a monotonic
    /// clock and only feeds the debounce check.
    pub fn handle(&mut self, intent: NavIntent, now_ms: u64) -> RenderDecision {
        let outcome = match intent {
            NavIntent::Advance(delta) => self.nav.advance(delta, now_ms),
            NavIntent::JumpTo(index) => self.nav.goto(index as i64, now_ms),
            NavIntent::JumpToEnd => self.nav.goto(self.nav.total() as i64 - 1, now_ms),
        };
        match outcome {
            NavOutcome::Moved { .. } => RenderDecision::Redraw,
            NavOutcome::Boundary(edge) => RenderDecision::Boundary(edge),
            NavOutcome::Unchanged | NavOutcome::Debounced => RenderDecision::None,
        }
    }

    /// Reclassify density from a new viewport height. Returns true
    /// when the tier changed and a redraw is needed.
    pub fn set_viewport_height(&mut self, height_px: f64) -> bool {
        let tier = classify(height_px);
        if tier != self.density {
            self.density = tier;
            true
        } else {
            false
        }
    }

    /// Render the current slide, fitted to the viewport. Any overflow
    /// escalation applies to this frame only.
    pub fn frame(&self, viewport: &Viewport) -> Result<DeckFrame> {
        render_fitted(&self.deck, self.nav.current(), self.density, viewport)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn total(&self) -> usize {
        self.nav.total()
    }

    /// 1-based shareable locator, kept in sync with every accepted move.
    pub fn locator(&self) -> usize {
        self.nav.locator()
    }

    pub fn density(&self) -> DensityTier {
        self.density
    }
}
