//! The booking backend: HTTP surface, lifecycle engine, and persistence.
//!
//! Layered, with each request flowing top to bottom:
//!
//! - `router` / `controller` — Axum routes and handlers; DTO conversion only
//! - `middleware` — session handling and the identity guard that resolves a
//!   session to a caller
//! - `service` — the appointment lifecycle engine with its authorization
//!   rules, plus the thin signup/signin service
//! - `data` — repositories over SeaORM; entities stay below this line, domain
//!   models above it
//! - `model` — domain models and operation parameter types
//! - `error` — the application error type and its HTTP response mapping
//!
//! Authorization is enforced by the service layer rather than by per-route
//! guards, so the rules hold no matter how the routes are wired.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
