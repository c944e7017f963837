// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keyboard {
    include!("../src/events/keyboard.rs");
}

use keyboard::is_close_key;

#[test]
fn escape_closes_dialog() {
    assert!(is_close_key("Escape"));
    // legacy Edge/IE name
    assert!(is_close_key("Esc"));
}

#[test]
fn other_keys_do_not_close_dialog() {
    for key in ["Enter", " ", "q", "escape", "Backspace", ""] {
        assert!(!is_close_key(key), "{key:?}");
    }
}
