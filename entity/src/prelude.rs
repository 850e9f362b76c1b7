pub use super::appointment::Entity as Appointment;
pub use super::person::Entity as Person;
