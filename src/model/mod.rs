//! Wire-level data transfer objects shared by all API endpoints.

pub mod api;
pub mod appointment;
pub mod auth;
