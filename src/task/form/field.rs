//! Form field identifiers and validation error kinds.

use std::collections::BTreeMap;
use std::fmt;

/// A field of the task form.
///
/// [`TaskField::data_cy`] is the stable identifier the markup exposes to
/// automation; scenarios address fields by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// Backend identifier; always disabled.
    Id,
    /// Free-text description.
    Description,
    /// Completion checkbox.
    Completed,
    /// Creation timestamp.
    CreatedAt,
    /// Optional target date.
    TargetDate,
}

impl TaskField {
    /// Every field in display order.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Description,
        Self::Completed,
        Self::CreatedAt,
        Self::TargetDate,
    ];

    /// Returns the automation identifier of the field.
    #[must_use]
    pub const fn data_cy(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Description => "description",
            Self::Completed => "completed",
            Self::CreatedAt => "createdAt",
            Self::TargetDate => "targetDate",
        }
    }

    /// Looks a field up by its automation identifier.
    #[must_use]
    pub fn from_data_cy(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.data_cy() == value)
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_cy())
    }
}

/// Reason a field value is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The field is required but empty.
    Required,
    /// The text is longer than allowed.
    MaxLength {
        /// Maximum number of characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },
    /// The timestamp does not match the form pattern.
    InvalidDateTime,
}

impl ErrorKind {
    /// Returns the error key shown next to the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MaxLength { .. } => "maxlength",
            Self::InvalidDateTime => "datetime",
        }
    }
}

/// Validation errors keyed by field. Fields without errors are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<TaskField, Vec<ErrorKind>>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kinds` against `field`, ignoring an empty list.
    pub fn extend(&mut self, field: TaskField, kinds: Vec<ErrorKind>) {
        if kinds.is_empty() {
            return;
        }
        self.0.entry(field).or_default().extend(kinds);
    }

    /// Returns the errors of `field`.
    #[must_use]
    pub fn get(&self, field: TaskField) -> &[ErrorKind] {
        self.0.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` when `field` has an error with the given key.
    #[must_use]
    pub fn has(&self, field: TaskField, key: &str) -> bool {
        self.get(field).iter().any(|kind| kind.key() == key)
    }

    /// Returns `true` when no field has errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over fields with errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &[ErrorKind])> {
        self.0.iter().map(|(field, kinds)| (*field, kinds.as_slice()))
    }
}
