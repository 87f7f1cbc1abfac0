//! Utility functions shared across modules.

use std::fmt;
use std::time::Duration;

/// A non-negative decimal number held as an integer count of `10^-decimals` steps.
///
/// Displays with "minimal decimals": trailing fractional zeros are dropped and
/// the decimal point disappears entirely when the value is a whole number, so
/// `1.00` prints as `1` and `1.50` as `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimal {
    scaled: u128,
    decimals: u32,
}

impl FixedDecimal {
    /// Rounds `numerator / denominator` half away from zero to `decimals` digits.
    ///
    /// `denominator` must be non-zero.
    #[must_use]
    pub fn round(numerator: u128, denominator: u128, decimals: u32) -> Self {
        let scale = 10u128.pow(decimals);
        let scaled = (numerator * scale + denominator / 2) / denominator;
        FixedDecimal { scaled, decimals }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.scaled == 0
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u128.pow(self.decimals);
        let whole = self.scaled / scale;
        let mut frac = self.scaled % scale;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let mut width = self.decimals as usize;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        write!(f, "{whole}.{frac:0width$}")
    }
}

/// Picks the singular word only for a count of exactly one.
#[inline]
pub fn pluralize(count: u128, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Formats a `std::time::Duration` into a compact string using `humantime`.
/// Used for log fields, not for user-facing output.
#[inline]
pub fn format_std_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}
