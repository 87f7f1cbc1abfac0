//! Common helper functions for tests and benchmarks.
use chrono::TimeDelta;
use pretty_string::duration::Nanos;

// --- Constants ---
pub const MICRO: i64 = 1_000;
pub const MILLI: i64 = 1_000 * MICRO;
pub const SECOND: i64 = 1_000 * MILLI;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;

// --- Duration Construction Helpers ---

/// Builds a `TimeDelta` from fractional milliseconds, rounded to the nearest
/// 100ns step. Avoids the float drift of multiplying out by hand, so
/// `from_millis_precise(0.995)` is exactly 995µs.
pub fn from_millis_precise(millis: f64) -> TimeDelta {
    let steps = (millis * 10_000.0).round() as i64;
    TimeDelta::nanoseconds(steps * 100)
}

/// Builds a `TimeDelta` from fractional seconds, rounded like [`from_millis_precise`].
pub fn from_secs_precise(secs: f64) -> TimeDelta {
    from_millis_precise(secs * 1_000.0)
}

/// Sums whole hours, minutes and seconds into a `TimeDelta`.
pub fn hms(hours: i64, minutes: i64, seconds: i64) -> TimeDelta {
    TimeDelta::nanoseconds(hours * HOUR + minutes * MINUTE + seconds * SECOND)
}

/// Raw nanoseconds, for inputs the other helpers cannot express.
pub fn ns(nanos: i64) -> Nanos {
    Nanos(nanos)
}

// --- Duration Table ---

/// Reference cases as (milliseconds, expected output), all non-negative.
pub const DURATION_TABLE: &[(f64, &str)] = &[
    (0.0, "0 millis"),
    (0.994, "0.99 millis"),
    (0.995, "1 milli"),
    (1.0, "1 milli"),
    (1.004, "1 milli"),
    (1.005, "1.01 millis"),
    (9.99, "9.99 millis"),
    (10.0, "10 millis"),
    (99.9, "99.9 millis"),
    (1_000.0, "1 second"),
    (1_010.0, "1.01 seconds"),
    (9_994.0, "9.99 seconds"),
    (9_995.0, "10 seconds"),
    (10_040.0, "10 seconds"),
    (10_050.0, "10.1 seconds"),
    (59_900.0, "59.9 seconds"),
    (60_000.0, "1 minute"),
    (3_599_000.0, "59 minutes, 59 seconds"),
    (3_600_000.0, "1 hour"),
    (3_660_000.0, "1 hour, 1 minute"),
    (3_900_000.0, "1 hour, 5 minutes"),
];
