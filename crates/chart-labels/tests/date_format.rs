// File: crates/chart-labels/tests/date_format.rs
// Purpose: Epoch-millisecond date formatting, offsets and range errors.

use chart_labels::{DateFormat, LabelError};

// 2023-11-14 22:13:20 UTC
const NOV_14_2023: f64 = 1_700_000_000_000.0;

#[test]
fn formats_epoch_millis_in_utc() {
    let f = DateFormat::new("%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(f.format(0.0).unwrap(), "1970-01-01 00:00:00");
    assert_eq!(f.format(NOV_14_2023).unwrap(), "2023-11-14 22:13:20");
}

#[test]
fn short_pattern() {
    assert_eq!(DateFormat::short().format(NOV_14_2023).unwrap(), "11/14/23 10:13 PM");
    assert_eq!(DateFormat::default(), DateFormat::short());
}

#[test]
fn fixed_offset_shifts_wall_clock() {
    let f = DateFormat::new("%H:%M").unwrap().with_offset_seconds(3600).unwrap();
    assert_eq!(f.format(NOV_14_2023).unwrap(), "23:13");
    assert_eq!(f.offset().local_minus_utc(), 3600);
    assert_eq!(f.pattern(), "%H:%M");
    assert_eq!(DateFormat::short().offset().local_minus_utc(), 0);
    assert!(DateFormat::short().with_offset_seconds(100_000).is_err());
}

#[test]
fn fractional_millis_truncate() {
    let f = DateFormat::new("%S%.3f").unwrap();
    assert_eq!(f.format(1999.9).unwrap(), "01.999");
    assert_eq!(f.format(f64::NAN).unwrap(), "00.000");
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = DateFormat::new("%Q").unwrap_err();
    assert!(matches!(err, LabelError::InvalidArgument(_)));
}

#[test]
fn out_of_range_timestamp() {
    let f = DateFormat::new("%Y").unwrap();
    assert_eq!(f.format(1e300).unwrap_err(), LabelError::DateOutOfRange(i64::MAX));
}
