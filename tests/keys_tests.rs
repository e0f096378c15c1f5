// Host-side tests for key bindings.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::*;

#[test]
fn fire_keys() {
    assert_eq!(action_for_key(" "), Some(KeyAction::Fire));
    assert_eq!(action_for_key("f"), Some(KeyAction::Fire));
    assert_eq!(action_for_key("F"), Some(KeyAction::Fire));
}

#[test]
fn enter_starts() {
    assert_eq!(action_for_key("Enter"), Some(KeyAction::StartMatch));
}

#[test]
fn other_keys_ignored() {
    for k in ["a", "Escape", "ArrowUp", "", "h"] {
        assert_eq!(action_for_key(k), None, "{:?}", k);
    }
}
