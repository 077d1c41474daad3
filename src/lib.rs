//! Task screens: CRUD support for the `Task` entity.
//!
//! This crate provides the client-side pieces behind the task list, detail
//! and edit screens of a generated CRUD application: the task model, the
//! editable form and its conversion to and from the JSON representation,
//! the detail view, route and menu registration, and the REST contract the
//! screens talk to.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: task records and their validation rules
//! - **Ports**: abstract traits for persistence and the REST resource
//! - **Adapters**: in-memory implementations of those ports
//!
//! # Modules
//!
//! - [`task`]: task model, form, view, ports, adapters and services
//! - [`navigation`]: route table, menu entries and browsing history
//! - [`config`]: form and REST settings

pub mod config;
pub mod navigation;
pub mod task;
