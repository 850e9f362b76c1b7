//! Appointment domain models and lifecycle parameter types.
//!
//! The central type here is `AppointmentPatch`: every lifecycle transition is
//! expressed as a patch that names exactly the fields the transition owns
//! (status, and the selected or preferred slot where applicable). The data
//! layer applies a patch in a single version-checked UPDATE, so concurrent
//! transitions on the same appointment can never splice together a record
//! with mixed field values.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::appointment::{AppointmentDto, AppointmentStatusDto, ChangeAppointmentDto};

pub use entity::appointment::Status;

/// A booked or requested time slot: a day plus an hour of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub day: NaiveDate,
    pub hour: i32,
}

impl From<ChangeAppointmentDto> for Slot {
    fn from(dto: ChangeAppointmentDto) -> Self {
        Slot {
            day: dto.day,
            hour: dto.hour,
        }
    }
}

/// Appointment domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    /// Slot requested by the owning client.
    pub day_preferred: NaiveDate,
    pub hour_preferred: i32,
    /// Slot confirmed or proposed by an admin; `None` until then.
    pub day_selected: Option<NaiveDate>,
    pub hour_selected: Option<i32>,
    pub description: Option<String>,
    pub owner_id: i32,
    pub status: Status,
    /// Version the record was read at; a transition is only applied while
    /// the stored version still matches.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            day_preferred: entity.day_preferred,
            hour_preferred: entity.hour_preferred,
            day_selected: entity.day_selected,
            hour_selected: entity.hour_selected,
            description: entity.description,
            owner_id: entity.owner_id,
            status: entity.status,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            day_preferred: self.day_preferred,
            hour_preferred: self.hour_preferred,
            day_selected: self.day_selected,
            hour_selected: self.hour_selected,
            description: self.description,
            owner: self.owner_id,
            status: match self.status {
                Status::Waiting => AppointmentStatusDto::Waiting,
                Status::Accepted => AppointmentStatusDto::Accepted,
                Status::Modify => AppointmentStatusDto::Modify,
                Status::Canceled => AppointmentStatusDto::Canceled,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// The slot the owner asked for, as a value.
    pub fn preferred_slot(&self) -> Slot {
        Slot {
            day: self.day_preferred,
            hour: self.hour_preferred,
        }
    }
}

/// Parameters for creating a new appointment request.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub owner_id: i32,
    pub day_preferred: NaiveDate,
    pub hour_preferred: i32,
    pub description: Option<String>,
}

/// Field-level update for one lifecycle transition.
///
/// Constructed only through the per-transition constructors below, which keeps
/// every status write inside the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentPatch {
    pub status: Status,
    /// New admin-side slot (`day_selected`/`hour_selected`), when the
    /// transition owns it.
    pub selected: Option<Slot>,
    /// New client-side slot (`day_preferred`/`hour_preferred`), when the
    /// transition owns it.
    pub preferred: Option<Slot>,
}

impl AppointmentPatch {
    /// Admin accepts: the selected slot becomes `slot` (the preferred slot at
    /// the time of acceptance) and the appointment is `ACCEPTED`.
    pub fn accept(slot: Slot) -> Self {
        Self {
            status: Status::Accepted,
            selected: Some(slot),
            preferred: None,
        }
    }

    /// Admin proposes an alternate slot: the selected slot becomes `slot` and
    /// the appointment moves to `MODIFY`, awaiting the client's response.
    pub fn propose(slot: Slot) -> Self {
        Self {
            status: Status::Modify,
            selected: Some(slot),
            preferred: None,
        }
    }

    /// Admin cancels; no slot changes.
    pub fn cancel() -> Self {
        Self {
            status: Status::Canceled,
            selected: None,
            preferred: None,
        }
    }

    /// Client accepts whatever is on offer; no slot changes.
    pub fn confirm() -> Self {
        Self {
            status: Status::Accepted,
            selected: None,
            preferred: None,
        }
    }

    /// Client re-requests a different slot: the preferred slot becomes `slot`
    /// and the appointment returns to `WAITING`.
    pub fn reschedule(slot: Slot) -> Self {
        Self {
            status: Status::Waiting,
            selected: None,
            preferred: Some(slot),
        }
    }
}
