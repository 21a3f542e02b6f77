//! Navigation state machine.
//!
//! Owns "which slide is current" and nothing else. Every public entry
//! point clamps the requested index, so `SlideIndexOutOfRange` can
//! never be triggered through this API.

/// Intents arriving within this many milliseconds of the previous
/// accepted move are treated as duplicates from overlapping input
/// sources (key-repeat plus swipe firing together) and dropped.
pub const DEBOUNCE_WINDOW_MS: u64 = 100;

/// Which edge of the deck a rejected move ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Result of applying one navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The current index changed; a re-render is required.
    Moved { index: usize },
    /// Already at the requested edge; transient feedback, not an error.
    Boundary(Edge),
    /// Requested index equals the current one; nothing to signal.
    Unchanged,
    /// Duplicate input inside the debounce window; dropped silently.
    Debounced,
}

/// Current position within a loaded deck.
///
/// Invariant: `0 <= current < total` at all times; `total` is fixed
/// for the lifetime of the deck.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current: usize,
    total: usize,
    last_move_ms: Option<u64>,
}

impl NavigationState {
    /// `total` must be non-zero; an empty deck is rejected before
    /// navigation exists. An out-of-range `start` falls back to 0.
    pub fn new(total: usize, start: Option<usize>) -> Self {
        debug_assert!(total > 0, "navigation requires a non-empty deck");
        let current = start.filter(|&index| index < total).unwrap_or(0);
        Self {
            current,
            total,
            last_move_ms: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based shareable locator for the current slide.
    pub fn locator(&self) -> usize {
        self.current + 1
    }

    /// Move to `index`, clamped to `[0, total - 1]`. `now_ms` is a
    /// monotonic timestamp used only for debouncing.
    pub fn goto(&mut self, index: i64, now_ms: u64) -> NavOutcome {
        if self.within_debounce_window(now_ms) {
            return NavOutcome::Debounced;
        }

        let clamped = index.clamp(0, self.total as i64 - 1) as usize;
        if clamped != self.current {
            self.current = clamped;
            self.last_move_ms = Some(now_ms);
            return NavOutcome::Moved { index: clamped };
        }

        // No movement: boundary feedback only if the request actually
        // pointed past an edge we are already sitting on.
        if index < clamped as i64 {
            NavOutcome::Boundary(Edge::Start)
        } else if index > clamped as i64 {
            NavOutcome::Boundary(Edge::End)
        } else {
            NavOutcome::Unchanged
        }
    }

    /// Relative move; `delta` is typically ±1.
    pub fn advance(&mut self, delta: i32, now_ms: u64) -> NavOutcome {
        self.goto(self.current as i64 + delta as i64, now_ms)
    }

    fn within_debounce_window(&self, now_ms: u64) -> bool {
        self.last_move_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < DEBOUNCE_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Timestamps spaced wider than the debounce window.
    fn t(step: u64) -> u64 {
        step * 1_000
    }

    #[test]
    fn starts_at_zero_by_default() {
        let nav = NavigationState::new(5, None);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.locator(), 1);
    }

    #[test]
    fn out_of_range_start_falls_back_to_zero() {
        let nav = NavigationState::new(3, Some(7));
        assert_eq!(nav.current(), 0);
        let nav = NavigationState::new(3, Some(2));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn goto_is_idempotent_without_boundary_noise() {
        let mut nav = NavigationState::new(5, None);
        assert_eq!(nav.goto(2, t(1)), NavOutcome::Moved { index: 2 });
        // Same in-range index again: no mutation, no boundary signal.
        assert_eq!(nav.goto(2, t(2)), NavOutcome::Unchanged);
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn boundary_signalled_only_past_the_edge() {
        let mut nav = NavigationState::new(3, None);
        assert_eq!(nav.goto(-1, t(1)), NavOutcome::Boundary(Edge::Start));
        assert_eq!(nav.goto(0, t(2)), NavOutcome::Unchanged);
        assert_eq!(nav.goto(2, t(3)), NavOutcome::Moved { index: 2 });
        assert_eq!(nav.goto(99, t(4)), NavOutcome::Boundary(Edge::End));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn advancing_past_the_end_never_panics() {
        let mut nav = NavigationState::new(4, None);
        for step in 1..4 {
            assert!(matches!(
                nav.advance(1, t(step)),
                NavOutcome::Moved { .. }
            ));
        }
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.advance(1, t(10)), NavOutcome::Boundary(Edge::End));
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn rapid_intents_are_debounced() {
        let mut nav = NavigationState::new(10, None);
        assert_eq!(nav.advance(1, 1_000), NavOutcome::Moved { index: 1 });
        // 50ms later: inside the window, dropped.
        assert_eq!(nav.advance(1, 1_050), NavOutcome::Debounced);
        assert_eq!(nav.current(), 1);
        // 100ms later: window elapsed, accepted.
        assert_eq!(nav.advance(1, 1_100), NavOutcome::Moved { index: 2 });
    }

    #[test]
    fn boundary_feedback_does_not_refresh_the_window() {
        let mut nav = NavigationState::new(2, None);
        assert_eq!(nav.advance(1, 1_000), NavOutcome::Moved { index: 1 });
        assert_eq!(nav.advance(1, 1_200), NavOutcome::Boundary(Edge::End));
        // A deliberate move shortly after boundary feedback still lands.
        assert_eq!(nav.advance(-1, 1_250), NavOutcome::Moved { index: 0 });
    }

    #[test]
    fn debounce_gates_boundary_pushes_too() {
        let mut nav = NavigationState::new(2, None);
        assert_eq!(nav.advance(1, 1_000), NavOutcome::Moved { index: 1 });
        assert_eq!(nav.advance(1, 1_020), NavOutcome::Debounced);
    }
}
