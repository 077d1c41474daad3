//! Wire representation of tasks exchanged with the REST backend.
//!
//! Timestamps travel as ISO-8601 strings and field names are camelCase.
//! Every field is optional on the wire; [`mapper`] decides which ones a
//! given domain shape requires.

mod dto;
pub mod mapper;

pub use dto::TaskDto;
