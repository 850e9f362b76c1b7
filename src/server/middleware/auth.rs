//! The identity guard.
//!
//! Resolves the current session to a `Caller` (person id + role). This is the
//! whole of the identity context: authorization decisions — role checks and
//! ownership checks — belong to the service layer, not to this guard.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::person::PersonRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::person::Caller,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to the authenticated caller.
    ///
    /// # Returns
    /// - `Ok(Caller)` - The signed-in person's id and role
    /// - `Err(AuthError::NotSignedIn)` - No person id in the session
    /// - `Err(AuthError::PersonNotInDatabase)` - Session references a deleted account
    pub async fn authenticate(&self) -> Result<Caller, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(person_id) = auth_session.get_person_id().await? else {
            return Err(AuthError::NotSignedIn.into());
        };

        let person_repo = PersonRepository::new(self.db);

        let Some(person) = person_repo.find_by_id(person_id).await? else {
            return Err(AuthError::PersonNotInDatabase(person_id).into());
        };

        Ok(Caller::from_entity(&person))
    }
}
