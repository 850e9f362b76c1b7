//! Factories that seed test databases with persons and appointments.
//!
//! Every factory fills in sensible defaults and generates unique values for
//! unique columns, so a test only names the fields it actually cares about:
//!
//! ```rust,ignore
//! let client = factory::person::create_person(db).await?;
//! let admin = factory::person::create_admin(db).await?;
//! let appointment = factory::appointment::create_appointment(db, client.id).await?;
//! ```
//!
//! For anything beyond the defaults, use `PersonFactory` and
//! `AppointmentFactory` directly.

pub mod appointment;
pub mod helpers;
pub mod person;

pub use appointment::{create_appointment, create_appointment_with_status};
pub use person::{create_admin, create_person};
