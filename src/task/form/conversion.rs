//! Conversions between the raw form value and the wire record.

use super::{
    TaskDraft,
    format::{format_date_time, parse_date_time},
};
use crate::task::wire::TaskDto;

/// Converts a raw form value into a record ready for submission.
///
/// Timestamps that are blank or do not match the form pattern become
/// `None`; the form's validation state reports them.
#[must_use]
pub fn to_wire(draft: &TaskDraft) -> TaskDto {
    TaskDto {
        id: draft.id,
        description: draft.description.clone(),
        completed: draft.completed,
        created_at: draft.created_at.as_deref().and_then(parse_date_time),
        target_date: draft.target_date.as_deref().and_then(parse_date_time),
    }
}

/// Converts a wire record into a raw form value.
#[must_use]
pub fn from_wire(dto: &TaskDto) -> TaskDraft {
    TaskDraft {
        id: dto.id,
        description: dto.description.clone(),
        completed: dto.completed,
        created_at: dto.created_at.map(format_date_time),
        target_date: dto.target_date.map(format_date_time),
    }
}
