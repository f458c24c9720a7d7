// Host-side tests for the pure countdown arithmetic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock {
    include!("../src/clock.rs");
}

use clock::*;

const SEC: f64 = 1000.0;
const MIN: f64 = 60.0 * SEC;
const HOUR: f64 = 60.0 * MIN;
const DAY: f64 = 24.0 * HOUR;

#[test]
fn splits_mixed_delta() {
    let remaining = 2.0 * DAY + 3.0 * HOUR + 4.0 * MIN + 5.0 * SEC;
    assert_eq!(
        countdown_parts(remaining),
        Some(CountdownParts {
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5,
        })
    );
}

#[test]
fn sub_second_delta_shows_all_zeros() {
    assert_eq!(
        countdown_parts(999.0),
        Some(CountdownParts {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        })
    );
}

#[test]
fn field_maxima_do_not_overflow() {
    let remaining = 23.0 * HOUR + 59.0 * MIN + 59.0 * SEC;
    let parts = countdown_parts(remaining).unwrap();
    assert_eq!(parts.days, 0);
    assert_eq!(parts.hours, 23);
    assert_eq!(parts.minutes, 59);
    assert_eq!(parts.seconds, 59);
}

#[test]
fn non_positive_delta_is_finished() {
    assert_eq!(countdown_parts(0.0), None);
    assert_eq!(countdown_parts(-1.0), None);
    assert_eq!(countdown_parts(-DAY), None);
    assert_eq!(countdown_parts(f64::NAN), None);
}

#[test]
fn pad2_zero_pads_single_digits() {
    assert_eq!(pad2(0), "00");
    assert_eq!(pad2(5), "05");
    assert_eq!(pad2(42), "42");
    assert_eq!(pad2(100), "100"); // days can exceed two digits
}
