//! Shared test tooling for the salonbook crates.
//!
//! `TestBuilder` configures and opens an isolated in-memory SQLite database
//! per test, `TestContext` owns it (and a session when one is needed), and
//! `factory` seeds it with persons and appointments.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn example() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let client = factory::person::create_person(db).await?;
//!     let appointment = factory::appointment::create_appointment(db, client.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
