use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{
    Appointment, AppointmentPatch, CreateAppointmentParams, Status,
};

/// The appointment store.
///
/// All mutations are single-statement writes. `apply` is the only way a
/// stored appointment changes after creation; it matches the row by id *and*
/// version, so a patch computed against a stale read never overwrites a
/// concurrent writer's work.
pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment request.
    ///
    /// New appointments always start in `WAITING` at version 1 with no
    /// selected slot.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let now = Utc::now();

        let inserted = entity::appointment::ActiveModel {
            day_preferred: ActiveValue::Set(params.day_preferred),
            hour_preferred: ActiveValue::Set(params.hour_preferred),
            day_selected: ActiveValue::Set(None),
            hour_selected: ActiveValue::Set(None),
            description: ActiveValue::Set(params.description),
            owner_id: ActiveValue::Set(params.owner_id),
            status: ActiveValue::Set(Status::Waiting),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(inserted))
    }

    /// Gets an appointment by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let found = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(found.map(Appointment::from_entity))
    }

    /// Gets all appointments owned by the given person, oldest first.
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Appointment>, DbErr> {
        let found = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(found.into_iter().map(Appointment::from_entity).collect())
    }

    /// Gets all appointments with the given status, oldest first.
    pub async fn find_by_status(&self, status: Status) -> Result<Vec<Appointment>, DbErr> {
        let found = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Status.eq(status))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(found.into_iter().map(Appointment::from_entity).collect())
    }

    /// Applies a lifecycle patch as one version-checked UPDATE.
    ///
    /// Writes exactly the fields the patch owns (status, selected and/or
    /// preferred slot) plus `updated_at`, and bumps the version. The UPDATE
    /// only matches while the stored version equals `expected_version`.
    ///
    /// # Returns
    /// - `Ok(Some(appointment))` - Patch applied; the re-read record
    /// - `Ok(None)` - No row matched: the appointment is gone or was modified
    ///   concurrently since it was read at `expected_version`
    /// - `Err(DbErr)` - Database error
    pub async fn apply(
        &self,
        id: i32,
        expected_version: i32,
        patch: AppointmentPatch,
    ) -> Result<Option<Appointment>, DbErr> {
        let mut update = entity::prelude::Appointment::update_many()
            .col_expr(
                entity::appointment::Column::Status,
                Expr::value(patch.status),
            )
            .col_expr(
                entity::appointment::Column::Version,
                Expr::value(expected_version + 1),
            )
            .col_expr(
                entity::appointment::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::appointment::Column::Id.eq(id))
            .filter(entity::appointment::Column::Version.eq(expected_version));

        if let Some(slot) = patch.selected {
            update = update
                .col_expr(
                    entity::appointment::Column::DaySelected,
                    Expr::value(Some(slot.day)),
                )
                .col_expr(
                    entity::appointment::Column::HourSelected,
                    Expr::value(Some(slot.hour)),
                );
        }

        if let Some(slot) = patch.preferred {
            update = update
                .col_expr(
                    entity::appointment::Column::DayPreferred,
                    Expr::value(slot.day),
                )
                .col_expr(
                    entity::appointment::Column::HourPreferred,
                    Expr::value(slot.hour),
                );
        }

        let result = update.exec(self.db).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes an appointment by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No appointment with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
