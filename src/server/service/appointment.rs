//! The appointment lifecycle engine.
//!
//! Every operation here follows the same protocol: resolve the caller's
//! authority (admin role, or ownership of the target appointment), validate
//! the transition against the current state, then apply a field-level patch
//! through one version-checked store write. Authorization lives in this layer
//! rather than in route guards, so the rules hold no matter how the HTTP
//! surface is wired.
//!
//! State machine:
//!
//! | From            | Operation     | Actor | Effect                  | To       |
//! |-----------------|---------------|-------|-------------------------|----------|
//! | (none)          | create        | owner | preferred slot set      | WAITING  |
//! | WAITING/MODIFY  | admin_accept  | admin | selected := preferred   | ACCEPTED |
//! | any active      | admin_change  | admin | selected := proposed    | MODIFY   |
//! | any active      | admin_cancel  | admin | —                       | CANCELED |
//! | any active      | client_accept | owner | —                       | ACCEPTED |
//! | any active      | client_change | owner | preferred := proposed   | WAITING  |
//!
//! CANCELED is terminal: "any active" excludes it, and operations on a
//! canceled appointment fail with `BadRequest`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, person::PersonRepository},
    error::AppError,
    model::{
        appointment::{Appointment, AppointmentPatch, CreateAppointmentParams, Slot, Status},
        person::Caller,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a single appointment. Admin only.
    pub async fn get(&self, caller: &Caller, id: i32) -> Result<Appointment, AppError> {
        require_admin(caller)?;

        self.load(id).await
    }

    /// Gets all appointments owned by `owner_id`. Owner only.
    ///
    /// The caller must be the requested owner, and the owner must exist in
    /// the person directory.
    pub async fn list_by_owner(
        &self,
        caller: &Caller,
        owner_id: i32,
    ) -> Result<Vec<Appointment>, AppError> {
        require_owner(caller, owner_id)?;

        let person_repo = PersonRepository::new(self.db);
        if person_repo.find_by_id(owner_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Person {} not found", owner_id)));
        }

        let repo = AppointmentRepository::new(self.db);
        Ok(repo.find_by_owner(owner_id).await?)
    }

    /// Gets all pending client requests (`WAITING`). Admin only.
    pub async fn list_requested(&self, caller: &Caller) -> Result<Vec<Appointment>, AppError> {
        require_admin(caller)?;

        let repo = AppointmentRepository::new(self.db);
        Ok(repo.find_by_status(Status::Waiting).await?)
    }

    /// Gets all confirmed appointments (`ACCEPTED`). Admin only.
    pub async fn list_accepted(&self, caller: &Caller) -> Result<Vec<Appointment>, AppError> {
        require_admin(caller)?;

        let repo = AppointmentRepository::new(self.db);
        Ok(repo.find_by_status(Status::Accepted).await?)
    }

    /// Gets all open negotiations (`MODIFY`). Admin only.
    pub async fn list_unconfirmed(&self, caller: &Caller) -> Result<Vec<Appointment>, AppError> {
        require_admin(caller)?;

        let repo = AppointmentRepository::new(self.db);
        Ok(repo.find_by_status(Status::Modify).await?)
    }

    /// Creates a new appointment request on behalf of its owner.
    ///
    /// The caller must be the declared owner — checked before any
    /// appointment-store access — and the owner must exist in the person
    /// directory (`BadRequest` otherwise; nothing is persisted).
    pub async fn create(
        &self,
        caller: &Caller,
        params: CreateAppointmentParams,
    ) -> Result<Appointment, AppError> {
        require_owner(caller, params.owner_id)?;

        let person_repo = PersonRepository::new(self.db);
        if person_repo.find_by_id(params.owner_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Owner person {} does not exist",
                params.owner_id
            )));
        }

        let repo = AppointmentRepository::new(self.db);
        Ok(repo.create(params).await?)
    }

    /// Admin accepts the owner's preferred slot.
    ///
    /// Only legal from `WAITING` or `MODIFY`. Copies the preferred slot into
    /// the selected fields and moves to `ACCEPTED`.
    pub async fn admin_accept(&self, caller: &Caller, id: i32) -> Result<Appointment, AppError> {
        require_admin(caller)?;

        let appointment = self.load(id).await?;

        if !matches!(appointment.status, Status::Waiting | Status::Modify) {
            return Err(AppError::BadRequest(
                "Only waiting or unconfirmed appointments can be accepted".to_string(),
            ));
        }

        let patch = AppointmentPatch::accept(appointment.preferred_slot());
        self.apply_transition(&appointment, patch).await
    }

    /// Admin proposes an alternate slot; the appointment moves to `MODIFY`.
    pub async fn admin_change(
        &self,
        caller: &Caller,
        id: i32,
        slot: Slot,
    ) -> Result<Appointment, AppError> {
        require_admin(caller)?;

        let appointment = self.load(id).await?;
        ensure_active(&appointment)?;

        self.apply_transition(&appointment, AppointmentPatch::propose(slot))
            .await
    }

    /// Admin cancels the appointment. Terminal.
    pub async fn admin_cancel(&self, caller: &Caller, id: i32) -> Result<Appointment, AppError> {
        require_admin(caller)?;

        let appointment = self.load(id).await?;
        ensure_active(&appointment)?;

        self.apply_transition(&appointment, AppointmentPatch::cancel())
            .await
    }

    /// Owner accepts the slot on offer; slots are left untouched.
    pub async fn client_accept(&self, caller: &Caller, id: i32) -> Result<Appointment, AppError> {
        let appointment = self.load(id).await?;
        require_owner(caller, appointment.owner_id)?;
        ensure_active(&appointment)?;

        self.apply_transition(&appointment, AppointmentPatch::confirm())
            .await
    }

    /// Owner re-requests a different slot; the appointment returns to
    /// `WAITING` with the new preferred slot.
    pub async fn client_change(
        &self,
        caller: &Caller,
        id: i32,
        slot: Slot,
    ) -> Result<Appointment, AppError> {
        let appointment = self.load(id).await?;
        require_owner(caller, appointment.owner_id)?;
        ensure_active(&appointment)?;

        self.apply_transition(&appointment, AppointmentPatch::reschedule(slot))
            .await
    }

    /// Deletes an appointment. Admin or owner only.
    pub async fn delete(&self, caller: &Caller, id: i32) -> Result<(), AppError> {
        let appointment = self.load(id).await?;

        if !caller.is_admin() {
            require_owner(caller, appointment.owner_id)?;
        }

        let repo = AppointmentRepository::new(self.db);
        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Appointment {} not found", id)));
        }

        Ok(())
    }

    async fn load(&self, id: i32) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Applies a patch against the version the appointment was read at.
    ///
    /// A write that matches no row means another transition landed in
    /// between; that surfaces as `Conflict` rather than silently overwriting
    /// the other writer's fields.
    async fn apply_transition(
        &self,
        appointment: &Appointment,
        patch: AppointmentPatch,
    ) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        repo.apply(appointment.id, appointment.version, patch)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!(
                    "Appointment {} was modified concurrently",
                    appointment.id
                ))
            })
    }
}

fn require_admin(caller: &Caller) -> Result<(), AppError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Admin role required".to_string()))
    }
}

fn require_owner(caller: &Caller, owner_id: i32) -> Result<(), AppError> {
    if caller.id == owner_id {
        Ok(())
    } else {
        Err(AppError::Unauthorized(
            "Caller is not the owner of this resource".to_string(),
        ))
    }
}

fn ensure_active(appointment: &Appointment) -> Result<(), AppError> {
    if appointment.status == Status::Canceled {
        Err(AppError::BadRequest(format!(
            "Appointment {} is canceled",
            appointment.id
        )))
    } else {
        Ok(())
    }
}
