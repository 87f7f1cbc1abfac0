//! Property-based tests for the formatters using proptest.

use pretty_string::collection::{format_collection, format_sequence, format_sequence_with};
use pretty_string::duration::{format_duration, Band, Nanos, NANOS_PER_MILLI, NANOS_PER_SEC};
use proptest::prelude::*;
use std::collections::BTreeSet;

// --- Test Constants ---
const TEN_HOURS_NS: i64 = 10 * 3_600 * 1_000_000_000;

/// Durations spread across every band, biased towards the small ones where
/// rounding matters.
fn arb_nanos() -> impl Strategy<Value = i64> {
    prop_oneof![
        -20_000_000i64..=20_000_000,
        -120_000_000_000i64..=120_000_000_000,
        -TEN_HOURS_NS..=TEN_HOURS_NS,
    ]
}

/// Splits "12.5 millis" into (12.5, "millis"); `None` for compound outputs.
fn scalar_parts(formatted: &str) -> Option<(f64, &str)> {
    let (number, unit) = formatted.split_once(' ')?;
    if unit.contains(' ') {
        return None;
    }
    Some((number.parse().ok()?, unit))
}

// --- Properties ---

proptest! {
    /// Property: negating a duration only adds a leading '-' (unless the
    /// magnitude rounds to zero, which prints unsigned).
    #[test]
    fn prop_sign_symmetry(nanos in 1i64..=TEN_HOURS_NS) {
        let positive = format_duration(Nanos(nanos));
        let negative = format_duration(Nanos(-nanos));
        if positive == "0 millis" {
            prop_assert_eq!(negative, positive);
        } else {
            prop_assert_eq!(negative, format!("-{positive}"));
        }
    }

    /// Property: formatting is a pure function of its input.
    #[test]
    fn prop_idempotent(nanos in arb_nanos()) {
        prop_assert_eq!(format_duration(Nanos(nanos)), format_duration(Nanos(nanos)));
    }

    /// Property: the displayed number is within half a display step of the true value.
    #[test]
    fn prop_scalar_bands_round_to_nearest(nanos in 0i64..60_000_000_000) {
        let formatted = format_duration(Nanos(nanos));
        let (shown, unit) = scalar_parts(&formatted).expect("scalar band");
        let band = Band::of(nanos as u128);
        let (actual, step) = match band {
            Band::FineMillis => (nanos as f64 / NANOS_PER_MILLI as f64, 0.01),
            Band::Millis => (nanos as f64 / NANOS_PER_MILLI as f64, 0.1),
            Band::WholeMillis => (nanos as f64 / NANOS_PER_MILLI as f64, 1.0),
            Band::FineSeconds => (nanos as f64 / NANOS_PER_SEC as f64, 0.01),
            Band::Seconds => (nanos as f64 / NANOS_PER_SEC as f64, 0.1),
            other => return Err(TestCaseError::fail(format!("unexpected band {other:?}"))),
        };
        prop_assert!((shown - actual).abs() <= step / 2.0 + 1e-9,
            "{nanos}ns shown as {formatted}, expected about {actual}");
        prop_assert!(unit.starts_with("milli") || unit.starts_with("second"));
    }

    /// Property: the singular unit word appears only when the number shown is 1.
    #[test]
    fn prop_singular_only_for_one(nanos in arb_nanos()) {
        let formatted = format_duration(Nanos(nanos));
        for clause in formatted.trim_start_matches('-').split(", ") {
            let (number, unit) = clause.split_once(' ').expect("number and unit");
            if !unit.ends_with('s') {
                prop_assert_eq!(number, "1", "in {}", formatted);
            }
        }
    }

    /// Property: the output never contains trailing fractional zeros.
    #[test]
    fn prop_minimal_decimals(nanos in arb_nanos()) {
        let formatted = format_duration(Nanos(nanos));
        let number = formatted.split(' ').next().unwrap_or_default();
        if number.contains('.') {
            prop_assert!(!number.ends_with('0'), "{}", formatted);
            prop_assert!(!number.ends_with('.'), "{}", formatted);
        }
    }

    /// Property: a formatted sequence contains every element in order.
    #[test]
    fn prop_sequence_lists_every_element(items in prop::collection::vec(any::<u16>(), 0..50)) {
        let formatted = format_sequence(&items);
        if items.is_empty() {
            prop_assert_eq!(formatted, "[]");
        } else {
            let body = formatted.strip_prefix("[ ").and_then(|s| s.strip_suffix(" ]")).unwrap_or_default();
            let parsed: Vec<u16> = body.split(", ").map(|s| s.parse().unwrap()).collect();
            prop_assert_eq!(parsed, items);
        }
    }

    /// Property: custom delimiters surround the body exactly once.
    #[test]
    fn prop_custom_delimiters(
        items in prop::collection::vec("[a-z]{1,4}", 1..10),
        before in "[<({]{1,2}",
        after in "[>)}]{1,2}",
    ) {
        let formatted = format_sequence_with(&items, &before, "|", &after);
        prop_assert_eq!(formatted, format!("{before} {} {after}", items.join("|")));
    }

    /// Property: dispatch on a set deduplicates through the set itself and uses braces.
    #[test]
    fn prop_set_dispatch(items in prop::collection::vec(0u8..10, 0..20)) {
        let set: BTreeSet<u8> = items.iter().copied().collect();
        let formatted = format_collection(&set);
        prop_assert!(
            formatted.starts_with('{') && formatted.ends_with('}'),
            "unbraced set output: {}",
            formatted
        );
        let expected = if set.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", set.iter().map(u8::to_string).collect::<Vec<_>>().join(", "))
        };
        prop_assert_eq!(formatted, expected);
    }
}
