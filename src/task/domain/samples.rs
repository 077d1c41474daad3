//! Generated fixture records for the task entity.
//!
//! The values mirror the samples produced by the entity generator and are
//! shared by unit tests, scenarios and demo data.

use super::{NewTask, Task, TaskDescription, TaskId};
use chrono::{DateTime, NaiveDate, Utc};

fn on_sample_day(hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 6, 24)
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
        .and_utc()
}

fn sample(description: &str, completed: bool, created_at: DateTime<Utc>) -> NewTask {
    NewTask::new(TaskDescription::from_trusted(description), created_at).with_completed(completed)
}

/// Sample carrying only the required fields.
#[must_use]
pub fn sample_with_required_data() -> Task {
    Task::from_new(
        TaskId::from_trusted(9181),
        sample("or consequently", false, on_sample_day(22, 38)),
    )
}

/// Sample carrying a subset of the optional fields.
#[must_use]
pub fn sample_with_partial_data() -> Task {
    Task::from_new(
        TaskId::from_trusted(20483),
        sample("positively really whoa", true, on_sample_day(20, 51))
            .with_target_date(on_sample_day(3, 34)),
    )
}

/// Sample carrying every field.
#[must_use]
pub fn sample_with_full_data() -> Task {
    Task::from_new(
        TaskId::from_trusted(13396),
        sample("where wherever", true, on_sample_day(15, 47))
            .with_target_date(on_sample_day(13, 1)),
    )
}

/// Sample for a task that has not been persisted.
#[must_use]
pub fn sample_with_new_data() -> NewTask {
    NewTask::new(
        TaskDescription::from_trusted("expostulate"),
        on_sample_day(12, 42),
    )
    .with_completed(true)
}
