//! Editable form state for tasks.
//!
//! A form is an explicit value-plus-errors structure: [`TaskDraft`] holds
//! the raw field values (timestamps as `YYYY-MM-DDTHH:mm` strings) and
//! [`FieldErrors`] holds the validation state derived from them. The pure
//! functions [`validate`], [`to_wire`] and [`from_wire`] do the work;
//! [`TaskFormService`] adds clock-derived defaults for new tasks.

mod conversion;
mod draft;
mod field;
pub mod format;
mod rules;
mod service;

pub use conversion::{from_wire, to_wire};
pub use draft::TaskDraft;
pub use field::{ErrorKind, FieldErrors, TaskField};
pub use rules::validate;
pub use service::{FormInputError, NewTaskSeed, TaskForm, TaskFormInput, TaskFormService};
