//! Repositories over the person and appointment tables.
//!
//! Every database statement in the application goes through one of these two
//! structs. Entities stay inside this layer; callers get domain models back.

pub mod appointment;
pub mod person;
