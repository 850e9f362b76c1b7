//! Domain models and operation-specific parameter types.

pub mod appointment;
pub mod person;
