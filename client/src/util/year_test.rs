use chrono::TimeZone;

use super::*;

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn year_changes_at_utc_midnight() {
    assert_eq!(year_at(utc(1999, 12, 31, 23, 59, 59)), 1999);
    assert_eq!(year_at(utc(2000, 1, 1, 0, 0, 0)), 2000);
}

#[test]
fn epoch_and_before() {
    assert_eq!(year_at(utc(1970, 1, 1, 0, 0, 0)), 1970);
    assert_eq!(year_at(utc(1969, 12, 31, 23, 59, 59)), 1969);
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2025);
}
