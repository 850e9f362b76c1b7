//! Session handling and the identity guard.

pub mod auth;
pub mod session;
