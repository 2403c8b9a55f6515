//! Adapter to convert winit key events to our KeyPress type

use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::chord::KeyPress;

/// Convert winit key event data to a KeyPress
///
/// Key names follow the browser's `KeyboardEvent.key` spelling (`"Enter"`,
/// `"ArrowUp"`, `" "` for space), so chords recorded here compare equal to
/// chords recorded by a browser host.
pub fn key_press_from_winit(logical_key: &Key, mods: ModifiersState) -> KeyPress {
    let key = match logical_key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(format!("{:?}", named)),
        _ => None,
    };

    KeyPress {
        shift: mods.shift_key(),
        control: mods.control_key(),
        alt: mods.alt_key(),
        key,
    }
}
