// Host-side tests for shared tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(TRANSITION_NAV_DELAY_MS > 0);
    assert!(TRANSITION_NAV_DELAY_MS <= 2000, "transition should feel brief");
    assert!(TIMELINE_REVEAL_THRESHOLD > 0.0 && TIMELINE_REVEAL_THRESHOLD < 1.0);
}

#[test]
fn storage_key_and_messages_are_nonempty() {
    assert!(!MUSIC_PREF_KEY.is_empty());
    assert!(!MUSIC_BLOCKED_PROMPT.is_empty());
    assert!(!COUNTDOWN_DONE_MESSAGE.is_empty());
}

#[test]
fn default_countdown_target_parses_as_naive_datetime() {
    // ISO-ish local datetime: YYYY-MM-DDTHH:MM:SS
    let parts: Vec<&str> = DEFAULT_COUNTDOWN_TARGET.splitn(2, 'T').collect();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].split('-').count(), 3);
    assert_eq!(parts[1].split(':').count(), 3);
}
