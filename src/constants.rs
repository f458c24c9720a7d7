/// Page-level tuning and shared identifiers.
///
/// Everything here is pure data so host-side tests can sanity-check the
/// relationships without a browser.
// Delay between showing the transition overlay and navigating (ms)
pub const TRANSITION_NAV_DELAY_MS: i32 = 500;

// Fraction of a timeline item that must be visible before it reveals
pub const TIMELINE_REVEAL_THRESHOLD: f64 = 0.3;

// localStorage key for the background-music preference
pub const MUSIC_PREF_KEY: &str = "musicPlaying";

// Shown once when the browser's autoplay policy blocks playback
pub const MUSIC_BLOCKED_PROMPT: &str =
    "Please click anywhere on the page first to enable music";

// Fallback when .countdown-container has no data-target-date
pub const DEFAULT_COUNTDOWN_TARGET: &str = "2024-12-31T23:59:59";

pub const COUNTDOWN_DONE_MESSAGE: &str =
    "The wait is over! Our special day has arrived! \u{1f496}";
