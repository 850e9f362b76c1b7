//! Appointment factory for creating test appointment entities.

use chrono::{NaiveDate, Utc};
use entity::appointment::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, owner.id)
///     .preferred(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(), 15)
///     .status(Status::Modify)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    day_preferred: NaiveDate,
    hour_preferred: i32,
    day_selected: Option<NaiveDate>,
    hour_selected: Option<i32>,
    description: Option<String>,
    status: Status,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - day_preferred: 2026-02-02, hour_preferred: 10
    /// - no selected slot, no description
    /// - status: `Status::Waiting`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            day_preferred: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            hour_preferred: 10,
            day_selected: None,
            hour_selected: None,
            description: None,
            status: Status::Waiting,
        }
    }

    pub fn preferred(mut self, day: NaiveDate, hour: i32) -> Self {
        self.day_preferred = day;
        self.hour_preferred = hour;
        self
    }

    pub fn selected(mut self, day: NaiveDate, hour: i32) -> Self {
        self.day_selected = Some(day);
        self.hour_selected = Some(hour);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Inserts the configured appointment into the database.
    ///
    /// The appointment is created at version 1 with repository-style timestamps.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - The inserted appointment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();

        entity::appointment::ActiveModel {
            day_preferred: ActiveValue::Set(self.day_preferred),
            hour_preferred: ActiveValue::Set(self.hour_preferred),
            day_selected: ActiveValue::Set(self.day_selected),
            hour_selected: ActiveValue::Set(self.hour_selected),
            description: ActiveValue::Set(self.description),
            owner_id: ActiveValue::Set(self.owner_id),
            status: ActiveValue::Set(self.status),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting appointment with default values for the given owner.
pub async fn create_appointment(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, owner_id).build().await
}

/// Creates an appointment with the given status for the given owner.
pub async fn create_appointment_with_status(
    db: &DatabaseConnection,
    owner_id: i32,
    status: Status,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, owner_id).status(status).build().await
}
