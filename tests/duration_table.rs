//! Reference table for the duration formatter, plus sign symmetry.

use pretty_string::duration::format_duration;
use test_helpers::*;

#[test]
fn reference_table() {
    for &(millis, expected) in DURATION_TABLE {
        let got = format_duration(from_millis_precise(millis));
        assert_eq!(got, expected, "formatting {millis}ms");
    }
}

#[test]
fn negated_reference_table() {
    for &(millis, expected) in DURATION_TABLE.iter().filter(|(millis, _)| *millis != 0.0) {
        let got = format_duration(from_millis_precise(-millis));
        assert_eq!(got, format!("-{expected}"), "formatting -{millis}ms");
    }
}

#[test]
fn zero_has_no_sign() {
    assert_eq!(format_duration(from_millis_precise(0.0)), "0 millis");
    assert_eq!(format_duration(from_millis_precise(-0.0)), "0 millis");
}

#[test]
fn negative_cases() {
    assert_eq!(format_duration(from_millis_precise(-0.995)), "-1 milli");
    assert_eq!(format_duration(from_millis_precise(-1.0)), "-1 milli");
    assert_eq!(format_duration(from_millis_precise(-1.004)), "-1 milli");
    assert_eq!(format_duration(from_secs_precise(-1.5)), "-1.5 seconds");
    assert_eq!(format_duration(from_millis_precise(-9.99)), "-9.99 millis");
    assert_eq!(format_duration(from_millis_precise(-10.0)), "-10 millis");
    assert_eq!(format_duration(from_millis_precise(-99.9)), "-99.9 millis");
    assert_eq!(format_duration(from_secs_precise(-1.0)), "-1 second");
    assert_eq!(format_duration(hms(0, -1, 0)), "-1 minute");
    assert_eq!(format_duration(hms(-1, 0, 0)), "-1 hour");
}

#[test]
fn demo_values() {
    assert_eq!(format_duration(from_millis_precise(0.1)), "0.1 millis");
    assert_eq!(format_duration(from_millis_precise(-1.005)), "-1.01 millis");
    assert_eq!(format_duration(from_secs_precise(-1.85)), "-1.85 seconds");
    assert_eq!(format_duration(from_secs_precise(-1.85 * 3_600.0)), "-1 hour, 51 minutes");
}

#[test]
fn compound_units() {
    assert_eq!(format_duration(hms(0, 59, 59)), "59 minutes, 59 seconds");
    assert_eq!(format_duration(hms(1, 1, 0)), "1 hour, 1 minute");
    assert_eq!(format_duration(hms(2, 0, 30)), "2 hours");
    assert_eq!(format_duration(hms(0, 2, 1)), "2 minutes, 1 second");
}

#[test]
fn std_duration_input() {
    use std::time::Duration;
    assert_eq!(format_duration(Duration::from_micros(995)), "1 milli");
    assert_eq!(format_duration(Duration::from_secs(3_660)), "1 hour, 1 minute");
    assert_eq!(format_duration(Duration::ZERO), "0 millis");
}

#[test]
fn raw_nanosecond_input() {
    assert_eq!(format_duration(ns(994_999)), "0.99 millis");
    assert_eq!(format_duration(ns(995_000)), "1 milli");
    assert_eq!(format_duration(ns(i64::MIN)).split(' ').nth(1), Some("hours,"));
}
