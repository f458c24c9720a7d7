const MS_PER_SEC: f64 = 1000.0;
const MS_PER_MIN: f64 = 60.0 * MS_PER_SEC;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MIN;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Remaining time split into display fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Split a millisecond delta. `None` once the target has been reached,
/// which is the caller's cue to stop the loop and show the completion
/// message.
pub fn countdown_parts(remaining_ms: f64) -> Option<CountdownParts> {
    if !(remaining_ms > 0.0) {
        return None;
    }
    Some(CountdownParts {
        days: (remaining_ms / MS_PER_DAY).floor() as u64,
        hours: ((remaining_ms % MS_PER_DAY) / MS_PER_HOUR).floor() as u64,
        minutes: ((remaining_ms % MS_PER_HOUR) / MS_PER_MIN).floor() as u64,
        seconds: ((remaining_ms % MS_PER_MIN) / MS_PER_SEC).floor() as u64,
    })
}

/// Two-digit zero padding for the countdown fields.
#[inline]
pub fn pad2(n: u64) -> String {
    format!("{n:02}")
}
