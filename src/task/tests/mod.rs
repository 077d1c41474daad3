//! Unit tests for the task module.


use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC timestamp, panicking on invalid input.
pub(super) fn at(date: (i32, u32, u32), hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .and_then(|day| day.and_hms_opt(hour, minute, second))
        .expect("valid timestamp")
        .and_utc()
}
