#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn at_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
}

#[test]
fn epoch_seconds___whole_seconds___has_no_fraction() {
    let seconds = epoch_seconds(&at_millis(1_446_049_600_000));

    assert_eq!(seconds, 1_446_049_600.0);
}

#[test]
fn epoch_seconds___milliseconds___become_fraction() {
    let seconds = epoch_seconds(&at_millis(1_446_049_600_250));

    assert_eq!(seconds, 1_446_049_600.25);
}

#[test]
fn epoch_seconds___sub_millisecond_precision___is_truncated() {
    let value = at_millis(1_000) + chrono::Duration::microseconds(999);

    assert_eq!(epoch_seconds(&value), 1.0);
}

#[test]
fn from_epoch_seconds___fraction___rounds_to_millisecond() {
    let value = from_epoch_seconds(1_446_049_600.1234).unwrap();

    assert_eq!(value.timestamp_millis(), 1_446_049_600_123);
}

#[test]
fn from_epoch_seconds___negative___is_before_epoch() {
    let value = from_epoch_seconds(-1.5).unwrap();

    assert_eq!(value.timestamp_millis(), -1_500);
}

#[test_case(f64::NAN)]
#[test_case(f64::INFINITY)]
#[test_case(f64::NEG_INFINITY)]
#[test_case(1e300)]
fn from_epoch_seconds___unrepresentable___returns_none(seconds: f64) {
    assert!(from_epoch_seconds(seconds).is_none());
}

#[test_case(1_446_049_600_000)]
#[test_case(1_446_049_600_001)]
#[test_case(1_446_049_600_999)]
#[test_case(0)]
fn epoch_seconds___millisecond_values___roundtrip(millis: i64) {
    let original = at_millis(millis);

    let recovered = from_epoch_seconds(epoch_seconds(&original)).unwrap();

    assert_eq!(recovered, original);
}

#[test]
fn parse_timestamp_str___numeric_string___reads_epoch_seconds() {
    let value = parse_timestamp_str("1446049600.5").unwrap();

    assert_eq!(value.timestamp_millis(), 1_446_049_600_500);
}

#[test]
fn parse_timestamp_str___rfc3339___converts_to_utc() {
    let value = parse_timestamp_str("2015-10-28T17:26:40+01:00").unwrap();

    assert_eq!(value.timestamp(), 1_446_049_600);
}

#[test]
fn parse_timestamp_str___garbage___returns_none() {
    assert!(parse_timestamp_str("last tuesday").is_none());
}
