//! Signup and signin.
//!
//! Deliberately thin: the rest of the system only consumes the resolved
//! identity (person id + role). Passwords are stored as hex-encoded SHA-256
//! digests and compared digest-to-digest.

use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::person::PersonRepository,
    error::{auth::AuthError, AppError},
    model::person::{Role, SignupParams},
};

/// Computes the stored digest for a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client account.
    ///
    /// # Returns
    /// - `Ok(person)` - The created account
    /// - `Err(AppError::Conflict)` - The phone number is already registered
    pub async fn signup(
        &self,
        displayname: String,
        phone: String,
        password: &str,
    ) -> Result<entity::person::Model, AppError> {
        let repo = PersonRepository::new(self.db);

        if repo.find_by_phone(&phone).await?.is_some() {
            return Err(AppError::Conflict(
                "Phone number is already registered".to_string(),
            ));
        }

        let person = repo
            .create(SignupParams {
                displayname,
                phone,
                password_hash: hash_password(password),
                role: Role::Client,
            })
            .await?;

        Ok(person)
    }

    /// Verifies credentials and returns the matching account.
    ///
    /// Unknown phone and wrong password both yield `InvalidCredentials`.
    pub async fn signin(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<entity::person::Model, AppError> {
        let repo = PersonRepository::new(self.db);

        let Some(person) = repo.find_by_phone(phone).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if person.password_hash != hash_password(password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(person)
    }
}
