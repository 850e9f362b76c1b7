use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment lifecycle status as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatusDto {
    Waiting,
    Accepted,
    Modify,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    /// Slot requested by the owning client.
    pub day_preferred: NaiveDate,
    pub hour_preferred: i32,
    /// Slot confirmed or proposed by an admin; absent until then.
    pub day_selected: Option<NaiveDate>,
    pub hour_selected: Option<i32>,
    pub description: Option<String>,
    /// Id of the owning person.
    pub owner: i32,
    pub status: AppointmentStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /api/appointment`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    /// Id of the person the appointment is created for. Must match the caller.
    pub owner: i32,
    pub day_preferred: NaiveDate,
    pub hour_preferred: i32,
    pub description: Option<String>,
}

/// Body for the admin-change and client-change endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeAppointmentDto {
    pub day: NaiveDate,
    pub hour: i32,
}
