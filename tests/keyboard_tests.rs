// Host-side tests for the pure key mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::{command_for_key, KeyCommand};

#[test]
fn space_toggles_play() {
    assert_eq!(command_for_key(" "), Some(KeyCommand::TogglePlay));
    // legacy IE/Edge key name
    assert_eq!(command_for_key("Spacebar"), Some(KeyCommand::TogglePlay));
}

#[test]
fn g_toggles_layout_in_either_case() {
    assert_eq!(command_for_key("g"), Some(KeyCommand::ToggleLayout));
    assert_eq!(command_for_key("G"), Some(KeyCommand::ToggleLayout));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["", "Enter", "h", "p", "Space", "1", "Escape"] {
        assert_eq!(command_for_key(key), None, "key {key:?}");
    }
}
