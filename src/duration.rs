//! Duration formatting with unit selection, boundary-correct rounding and
//! pluralization.
//!
//! Every input is normalized to a signed nanosecond count (`i128`) and all
//! comparisons and rounding are done in integer arithmetic, so values sitting
//! exactly on a boundary such as 0.995ms or 1.004s are classified exactly.
//!
//! | magnitude          | output                       |
//! |--------------------|------------------------------|
//! | `< 10ms`           | `0.99 millis`, `1 milli`     |
//! | `< 100ms`          | `99.9 millis`                |
//! | `< 1s`             | `999 millis`                 |
//! | `< 10s`            | `1 second`, `9.99 seconds`   |
//! | `< 1min`           | `59.9 seconds`               |
//! | `< 1h`             | `59 minutes, 59 seconds`     |
//! | otherwise          | `1 hour, 5 minutes`          |


use crate::util::{pluralize, FixedDecimal};
use chrono::TimeDelta;
use std::fmt;
use tracing::trace;

pub const NANOS_PER_MILLI: u128 = 1_000_000;
pub const NANOS_PER_SEC: u128 = 1_000 * NANOS_PER_MILLI;
pub const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
pub const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

// Magnitudes in [0.995ms, 1.005ms) display as exactly "1" at two decimals.
const SINGLE_MILLI_LOWER_INCLUSIVE: u128 = 995_000;
const SINGLE_MILLI_UPPER_EXCLUSIVE: u128 = 1_005_000;

const SINGLE_SECOND_UPPER_EXCLUSIVE: u128 = 1_004 * NANOS_PER_MILLI;

/// Anything that can be read as a signed elapsed time in nanoseconds.
pub trait Elapsed {
    fn signed_nanos(&self) -> i128;
}

impl Elapsed for TimeDelta {
    fn signed_nanos(&self) -> i128 {
        // `subsec_nanos` carries the same sign as `num_seconds`.
        i128::from(self.num_seconds()) * NANOS_PER_SEC as i128 + i128::from(self.subsec_nanos())
    }
}

impl Elapsed for std::time::Duration {
    fn signed_nanos(&self) -> i128 {
        // At most u64::MAX seconds, far below i128::MAX nanoseconds.
        self.as_nanos() as i128
    }
}

/// A raw signed nanosecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nanos(pub i64);

impl Elapsed for Nanos {
    fn signed_nanos(&self) -> i128 {
        i128::from(self.0)
    }
}

impl<E: Elapsed + ?Sized> Elapsed for &E {
    fn signed_nanos(&self) -> i128 {
        (**self).signed_nanos()
    }
}

/// The display band a magnitude falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Below 10ms: milliseconds with up to two decimals.
    FineMillis,
    /// 10ms to 100ms: milliseconds with up to one decimal.
    Millis,
    /// 100ms to 1s: whole milliseconds.
    WholeMillis,
    /// 1s to 10s: seconds with up to two decimals.
    FineSeconds,
    /// 10s to 1min: seconds with up to one decimal.
    Seconds,
    /// 1min to 1h: minutes and seconds.
    Minutes,
    /// 1h and above: hours and minutes.
    Hours,
}

impl Band {
    /// Selects the band for an absolute magnitude in nanoseconds.
    pub fn of(abs_nanos: u128) -> Self {
        if abs_nanos < 10 * NANOS_PER_MILLI {
            Band::FineMillis
        } else if abs_nanos < 100 * NANOS_PER_MILLI {
            Band::Millis
        } else if abs_nanos < NANOS_PER_SEC {
            Band::WholeMillis
        } else if abs_nanos < 10 * NANOS_PER_SEC {
            Band::FineSeconds
        } else if abs_nanos < NANOS_PER_MIN {
            Band::Seconds
        } else if abs_nanos < NANOS_PER_HOUR {
            Band::Minutes
        } else {
            Band::Hours
        }
    }
}

#[inline]
fn rounds_to_single_milli(abs_nanos: u128) -> bool {
    (SINGLE_MILLI_LOWER_INCLUSIVE..SINGLE_MILLI_UPPER_EXCLUSIVE).contains(&abs_nanos)
}

#[inline]
fn rounds_to_single_second(abs_nanos: u128) -> bool {
    abs_nanos < SINGLE_SECOND_UPPER_EXCLUSIVE
}

/// `Display` adapter returned by [`pretty_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrettyDuration {
    nanos: i128,
}

impl PrettyDuration {
    /// The signed nanosecond count being displayed.
    pub fn nanos(&self) -> i128 {
        self.nanos
    }

    /// The band the magnitude falls into.
    pub fn band(&self) -> Band {
        Band::of(self.nanos.unsigned_abs())
    }

    fn write_scalar(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: FixedDecimal,
        unit: &'static str,
    ) -> fmt::Result {
        // A magnitude that rounds to zero never carries a sign.
        if self.nanos < 0 && !value.is_zero() {
            f.write_str("-")?;
        }
        write!(f, "{value} {unit}")
    }

    fn write_compound(
        &self,
        f: &mut fmt::Formatter<'_>,
        major: (u128, &'static str, &'static str),
        minor: (u128, &'static str, &'static str),
    ) -> fmt::Result {
        if self.nanos < 0 {
            f.write_str("-")?;
        }
        let (count, singular, plural) = major;
        write!(f, "{count} {}", pluralize(count, singular, plural))?;
        let (count, singular, plural) = minor;
        if count != 0 {
            write!(f, ", {count} {}", pluralize(count, singular, plural))?;
        }
        Ok(())
    }
}

impl fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.nanos.unsigned_abs();
        match Band::of(abs) {
            Band::FineMillis => {
                let unit = if rounds_to_single_milli(abs) { "milli" } else { "millis" };
                self.write_scalar(f, FixedDecimal::round(abs, NANOS_PER_MILLI, 2), unit)
            }
            Band::Millis => self.write_scalar(f, FixedDecimal::round(abs, NANOS_PER_MILLI, 1), "millis"),
            Band::WholeMillis => {
                self.write_scalar(f, FixedDecimal::round(abs, NANOS_PER_MILLI, 0), "millis")
            }
            band @ (Band::FineSeconds | Band::Seconds) => {
                let decimals = if band == Band::FineSeconds { 2 } else { 1 };
                let unit = if rounds_to_single_second(abs) { "second" } else { "seconds" };
                self.write_scalar(f, FixedDecimal::round(abs, NANOS_PER_SEC, decimals), unit)
            }
            Band::Minutes => self.write_compound(
                f,
                (abs / NANOS_PER_MIN, "minute", "minutes"),
                ((abs % NANOS_PER_MIN) / NANOS_PER_SEC, "second", "seconds"),
            ),
            Band::Hours => self.write_compound(
                f,
                (abs / NANOS_PER_HOUR, "hour", "hours"),
                ((abs % NANOS_PER_HOUR) / NANOS_PER_MIN, "minute", "minutes"),
            ),
        }
    }
}

/// Wraps a duration in a `Display` adapter that renders it with the
/// coarsest unit giving three or four significant digits.
pub fn pretty_duration<E: Elapsed>(elapsed: E) -> PrettyDuration {
    PrettyDuration {
        nanos: elapsed.signed_nanos(),
    }
}

/// Formats a duration into a human-readable string.
///
/// ```
/// use chrono::TimeDelta;
/// use pretty_string::duration::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::microseconds(995)), "1 milli");
/// assert_eq!(format_duration(TimeDelta::milliseconds(-1500)), "-1.5 seconds");
/// assert_eq!(format_duration(TimeDelta::minutes(65)), "1 hour, 5 minutes");
/// ```
pub fn format_duration<E: Elapsed>(elapsed: E) -> String {
    let pretty = pretty_duration(elapsed);
    trace!(nanos = %pretty.nanos(), band = ?pretty.band(), "formatting duration");
    pretty.to_string()
}
