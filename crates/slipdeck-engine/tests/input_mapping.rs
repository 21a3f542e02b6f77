use slipdeck_engine::{InputContext, Key, NavIntent, RawInput, map_input};

fn map(raw: RawInput) -> Option<NavIntent> {
    map_input(&raw, &InputContext::default())
}

#[test]
fn space_advances_and_shift_reverses() {
    let forward = RawInput::Key {
        key: Key::Space,
        shift: false,
    };
    let backward = RawInput::Key {
        key: Key::Space,
        shift: true,
    };
    assert_eq!(map(forward), Some(NavIntent::Advance(1)));
    assert_eq!(map(backward), Some(NavIntent::Advance(-1)));
}

#[test]
fn directional_and_page_keys() {
    for key in [Key::Right, Key::PageDown] {
        assert_eq!(
            map(RawInput::Key { key, shift: false }),
            Some(NavIntent::Advance(1))
        );
    }
    for key in [Key::Left, Key::PageUp] {
        assert_eq!(
            map(RawInput::Key { key, shift: false }),
            Some(NavIntent::Advance(-1))
        );
    }
}

#[test]
fn jump_keys() {
    assert_eq!(
        map(RawInput::Key {
            key: Key::Home,
            shift: false
        }),
        Some(NavIntent::JumpTo(0))
    );
    assert_eq!(
        map(RawInput::Key {
            key: Key::End,
            shift: false
        }),
        Some(NavIntent::JumpToEnd)
    );
}

#[test]
fn keys_suppressed_while_text_entry_active() {
    let ctx = InputContext {
        text_entry_active: true,
    };
    let key = RawInput::Key {
        key: Key::Right,
        shift: false,
    };
    assert_eq!(map_input(&key, &ctx), None);
    // Pointer input is not keyboard input and stays live.
    let click = RawInput::Click {
        in_control_region: false,
    };
    assert_eq!(map_input(&click, &ctx), Some(NavIntent::Advance(1)));
}

#[test]
fn swipe_requires_distance_and_horizontal_dominance() {
    // Leftward swipe advances.
    assert_eq!(
        map(RawInput::SwipeEnd { dx: -80.0, dy: 10.0 }),
        Some(NavIntent::Advance(1))
    );
    // Rightward swipe goes back.
    assert_eq!(
        map(RawInput::SwipeEnd { dx: 80.0, dy: -10.0 }),
        Some(NavIntent::Advance(-1))
    );
    // Too short.
    assert_eq!(map(RawInput::SwipeEnd { dx: -40.0, dy: 0.0 }), None);
    // Predominantly vertical: scroll intent, not navigation.
    assert_eq!(map(RawInput::SwipeEnd { dx: -60.0, dy: 90.0 }), None);
    // Exactly at the distance threshold counts.
    assert_eq!(
        map(RawInput::SwipeEnd { dx: -55.0, dy: 0.0 }),
        Some(NavIntent::Advance(1))
    );
}

#[test]
fn wheel_threshold_filters_noise() {
    assert_eq!(map(RawInput::Wheel { delta_y: 15.0 }), Some(NavIntent::Advance(1)));
    assert_eq!(map(RawInput::Wheel { delta_y: -15.0 }), Some(NavIntent::Advance(-1)));
    assert_eq!(map(RawInput::Wheel { delta_y: 2.0 }), None);
    assert_eq!(map(RawInput::Wheel { delta_y: -4.0 }), None);
}

#[test]
fn click_respects_control_region() {
    assert_eq!(
        map(RawInput::Click {
            in_control_region: false
        }),
        Some(NavIntent::Advance(1))
    );
    assert_eq!(
        map(RawInput::Click {
            in_control_region: true
        }),
        None
    );
}
