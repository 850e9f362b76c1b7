//! SeaORM entity definitions for the salonbook database schema.

pub mod appointment;
pub mod person;
pub mod prelude;
