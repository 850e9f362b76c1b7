//! HTTP request handlers.

pub mod appointment;
pub mod auth;
