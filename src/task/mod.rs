//! Task entity: model, wire mapping, editable form, detail view and the
//! persistence and REST ports behind the screens.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Wire records in [`wire`]
//! - Form state in [`form`] and presentation in [`view`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Persistence services in [`services`]

pub mod adapters;
pub mod domain;
pub mod form;
pub mod ports;
pub mod services;
pub mod view;
pub mod wire;

#[cfg(test)]
mod tests;
