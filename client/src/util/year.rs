//! Current calendar year for the footer copyright line.
//!
//! In the browser `chrono`'s `wasmbind` feature reads the clock through
//! `js_sys::Date`; on the server it uses the system clock.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use chrono::{DateTime, Datelike, Utc};

/// UTC calendar year of `at`.
#[must_use]
pub fn year_at(at: DateTime<Utc>) -> i32 {
    at.year()
}

/// The current UTC year.
#[must_use]
pub fn current_year() -> i32 {
    year_at(Utc::now())
}
