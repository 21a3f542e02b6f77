//! Input adapter: raw event → navigation intent.
//!
//! Pure mapping rules, decoupled from any terminal or window system.
//! The frontend normalizes its events into `RawInput` (pixel-scale
//! displacements) and applies the returned intent to the session; it
//! is also responsible for suppressing default scrolling on its side.

/// Minimum horizontal travel for a drag to count as a swipe.
pub const SWIPE_MIN_PX: f32 = 55.0;

/// Wheel deltas at or below this magnitude are ignored as noise.
pub const WHEEL_MIN_DELTA: f32 = 4.0;

/// Keys the runtime recognizes, already stripped of backend detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Primary advance key; reversed by the shift modifier.
    Space,
    Right,
    Left,
    PageDown,
    PageUp,
    Home,
    End,
}

/// A raw input event normalized to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    Key { key: Key, shift: bool },
    /// Completed touch/drag gesture: total displacement in px,
    /// positive `dx` pointing right, positive `dy` pointing down.
    SwipeEnd { dx: f32, dy: f32 },
    /// Wheel/trackpad scroll; positive `delta_y` scrolls down.
    Wheel { delta_y: f32 },
    /// Pointer tap. `in_control_region` is true when the target sits
    /// inside the reserved status/heads-up overlay.
    Click { in_control_region: bool },
}

/// A normalized navigation request, decoupled from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance(i32),
    JumpTo(usize),
    /// Jump to the last slide; resolved against the deck by the session.
    JumpToEnd,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext {
    /// While a text-entry control (the jump prompt) has focus, every
    /// keyboard event belongs to it and never becomes navigation.
    pub text_entry_active: bool,
}

/// Map one raw event to a navigation intent, or `None` when the event
/// does not express navigation (noise, vertical scroll, chrome click,
/// keystrokes owned by a text control).
pub fn map_input(raw: &RawInput, ctx: &InputContext) -> Option<NavIntent> {
    match *raw {
        RawInput::Key { .. } if ctx.text_entry_active => None,
        RawInput::Key { key, shift } => map_key(key, shift),
        RawInput::SwipeEnd { dx, dy } => {
            // Must clear the distance threshold AND be predominantly
            // horizontal, otherwise it is scroll intent.
            if dx.abs() < SWIPE_MIN_PX || dx.abs() < dy.abs() {
                return None;
            }
            Some(if dx < 0.0 {
                NavIntent::Advance(1)
            } else {
                NavIntent::Advance(-1)
            })
        }
        RawInput::Wheel { delta_y } => {
            if delta_y.abs() <= WHEEL_MIN_DELTA {
                return None;
            }
            Some(if delta_y > 0.0 {
                NavIntent::Advance(1)
            } else {
                NavIntent::Advance(-1)
            })
        }
        RawInput::Click { in_control_region } => {
            (!in_control_region).then_some(NavIntent::Advance(1))
        }
    }
}

fn map_key(key: Key, shift: bool) -> Option<NavIntent> {
    match key {
        Key::Space => Some(if shift {
            NavIntent::Advance(-1)
        } else {
            NavIntent::Advance(1)
        }),
        Key::Right | Key::PageDown => Some(NavIntent::Advance(1)),
        Key::Left | Key::PageUp => Some(NavIntent::Advance(-1)),
        Key::Home => Some(NavIntent::JumpTo(0)),
        Key::End => Some(NavIntent::JumpToEnd),
    }
}
