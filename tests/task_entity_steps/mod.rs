//! Step definitions for the task entity scenarios.

pub mod world;

mod given;
mod then;
mod when;
