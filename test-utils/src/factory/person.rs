//! Person factory for creating test person entities.
//!
//! Provides factory methods for creating person entities with sensible defaults,
//! reducing boilerplate in tests. The factory supports customization through a
//! builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::person::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&db)
///     .displayname("Custom Person")
///     .phone("5550001111")
///     .role(Role::Admin)
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    displayname: String,
    phone: String,
    password_hash: String,
    role: Role,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - displayname: `"Person {id}"` where id is auto-incremented
    /// - phone: unique ten-digit number derived from the id
    /// - password_hash: fixed placeholder digest
    /// - role: `Role::Client`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            displayname: format!("Person {}", id),
            phone: format!("555{:07}", id),
            password_hash: "testdigest".to_string(),
            role: Role::Client,
        }
    }

    pub fn displayname(mut self, displayname: &str) -> Self {
        self.displayname = displayname.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn password_hash(mut self, password_hash: &str) -> Self {
        self.password_hash = password_hash.to_string();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Inserts the configured person into the database.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - The inserted person
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        let now = Utc::now();

        entity::person::ActiveModel {
            displayname: ActiveValue::Set(self.displayname),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

/// Creates an admin person with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).role(Role::Admin).build().await
}
