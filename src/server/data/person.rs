use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::person::{Role, SignupParams};

/// The person directory: lookups by id and phone, plus account creation.
pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Phone.eq(phone))
            .one(self.db)
            .await
    }

    /// Inserts a new person account.
    pub async fn create(&self, params: SignupParams) -> Result<entity::person::Model, DbErr> {
        let now = Utc::now();

        entity::person::ActiveModel {
            displayname: ActiveValue::Set(params.displayname),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Whether any admin account exists. Used by the startup admin check.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Person::find()
            .filter(entity::person::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
