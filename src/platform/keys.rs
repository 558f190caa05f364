//! Keyboard mapping from DOM `KeyboardEvent.key` values

use crate::sim::Key;

/// Map a DOM key name to a game key
pub fn key_from_name(name: &str) -> Option<Key> {
    match name {
        "a" | "A" | "ArrowLeft" => Some(Key::Left),
        "d" | "D" | "ArrowRight" => Some(Key::Right),
        " " | "Spacebar" => Some(Key::Fire),
        _ => None,
    }
}
