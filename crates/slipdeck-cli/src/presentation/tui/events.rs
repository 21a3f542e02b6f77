//! Crossterm event normalization.
//!
//! Translates backend key and mouse events into the engine's
//! `RawInput` values, converting cell coordinates to pixel scale so
//! the gesture thresholds keep their meaning.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use slipdeck_engine::{Key, RawInput};

use crate::config::ViewerConfig;

/// Synthetic wheel displacement per scroll tick, in px. Terminal
/// wheels report ticks, not deltas; one tick is well past the noise
/// threshold so a single notch navigates.
const WHEEL_TICK_PX: f32 = 15.0;

/// Map a key event to a navigation-relevant `RawInput`. Keys with
/// local meaning (quit, jump prompt, note toggle) are handled by the
/// presenter before this is consulted.
pub fn map_key_event(key: &KeyEvent) -> Option<RawInput> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let mapped = match key.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Right => Key::Right,
        KeyCode::Left => Key::Left,
        KeyCode::Down | KeyCode::PageDown => Key::PageDown,
        KeyCode::Up | KeyCode::PageUp => Key::PageUp,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(RawInput::Key { key: mapped, shift })
}

/// Tracks an in-flight pointer press so button release can be
/// classified as a tap or a completed drag.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press: Option<(u16, u16)>,
}

impl PointerTracker {
    /// Feed one mouse event; returns a `RawInput` when the event
    /// completes a gesture. The reserved control region is the topbar
    /// chrome (row 0) plus the status bar at `status_row`; taps there
    /// never navigate.
    pub fn feed(
        &mut self,
        event: &MouseEvent,
        config: &ViewerConfig,
        status_row: u16,
    ) -> Option<RawInput> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col, row) = self.press.take()?;
                let dx = (event.column as f32 - col as f32) * config.cell_width_px as f32;
                let dy = (event.row as f32 - row as f32) * config.cell_height_px as f32;
                if dx == 0.0 && dy == 0.0 {
                    Some(RawInput::Click {
                        in_control_region: event.row == 0 || event.row >= status_row,
                    })
                } else {
                    Some(RawInput::SwipeEnd { dx, dy })
                }
            }
            MouseEventKind::ScrollDown => Some(RawInput::Wheel {
                delta_y: WHEEL_TICK_PX,
            }),
            MouseEventKind::ScrollUp => Some(RawInput::Wheel {
                delta_y: -WHEEL_TICK_PX,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn space_keeps_the_shift_modifier() {
        assert_eq!(
            map_key_event(&key(KeyCode::Char(' '), KeyModifiers::SHIFT)),
            Some(RawInput::Key {
                key: Key::Space,
                shift: true
            })
        );
    }

    #[test]
    fn letter_keys_are_not_navigation() {
        assert_eq!(map_key_event(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn press_release_at_same_cell_is_a_tap() {
        let config = ViewerConfig::default();
        let mut tracker = PointerTracker::default();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(tracker.feed(&down, &config, 40), None);
        assert_eq!(
            tracker.feed(&up, &config, 40),
            Some(RawInput::Click {
                in_control_region: false
            })
        );
    }

    #[test]
    fn tap_on_the_status_row_is_flagged_as_control_region() {
        let config = ViewerConfig::default();
        let mut tracker = PointerTracker::default();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 40,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 3,
            row: 40,
            modifiers: KeyModifiers::NONE,
        };
        tracker.feed(&down, &config, 40);
        assert_eq!(
            tracker.feed(&up, &config, 40),
            Some(RawInput::Click {
                in_control_region: true
            })
        );
    }

    #[test]
    fn tap_on_the_topbar_row_is_flagged_as_control_region() {
        let config = ViewerConfig::default();
        let mut tracker = PointerTracker::default();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 12,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        tracker.feed(&down, &config, 40);
        // A tap on the brand/progress chrome must not advance.
        assert_eq!(
            tracker.feed(&up, &config, 40),
            Some(RawInput::Click {
                in_control_region: true
            })
        );
    }

    #[test]
    fn drag_reports_pixel_scaled_displacement() {
        let config = ViewerConfig::default();
        let mut tracker = PointerTracker::default();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        tracker.feed(&down, &config, 40);
        // 10 cells at 8 px/cell, leftward.
        assert_eq!(
            tracker.feed(&up, &config, 40),
            Some(RawInput::SwipeEnd { dx: -80.0, dy: 0.0 })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let config = ViewerConfig::default();
        let mut tracker = PointerTracker::default();
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(tracker.feed(&up, &config, 40), None);
    }
}
