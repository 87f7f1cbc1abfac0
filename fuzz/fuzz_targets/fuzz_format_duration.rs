#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use chrono::TimeDelta;
use libfuzzer_sys::fuzz_target;
use pretty_string::duration::format_duration;
use pretty_string::Nanos;

#[derive(Arbitrary, Debug)]
struct DurationInput {
    nanos: i64,
    // Second input path through chrono, in whole milliseconds.
    millis: i32,
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = DurationInput::arbitrary(&mut u) else {
        return;
    };

    let formatted = format_duration(Nanos(input.nanos));
    assert!(!formatted.is_empty());
    assert!(!formatted.starts_with("-0 ") && !formatted.starts_with("--"));

    // i64::MIN has no positive counterpart in i64.
    if let Some(negated) = input.nanos.checked_neg() {
        let mirrored = format_duration(Nanos(negated));
        let positive = formatted.trim_start_matches('-');
        assert_eq!(positive, mirrored.trim_start_matches('-'));
    }

    let delta = TimeDelta::milliseconds(i64::from(input.millis));
    let via_chrono = format_duration(delta);
    let via_nanos = format_duration(Nanos(i64::from(input.millis) * 1_000_000));
    assert_eq!(via_chrono, via_nanos);
});
