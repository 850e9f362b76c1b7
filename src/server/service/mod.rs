//! Business logic orchestration between controllers and the data layer.
//!
//! `appointment` holds the lifecycle engine — the state machine and its
//! authorization rules. `auth` is the thin signup/signin collaborator.

pub mod appointment;
pub mod auth;
