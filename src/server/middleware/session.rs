//! Typed wrapper around the raw tower-sessions `Session`.
//!
//! Session keys live here and nowhere else; the rest of the code reads and
//! writes the session only through this interface.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_PERSON_ID: &str = "auth:person";

/// The authentication slice of the session: which person is signed in.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as signed in for the given person.
    pub async fn set_person_id(&self, person_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_PERSON_ID, person_id)
            .await?;
        Ok(())
    }

    /// The signed-in person's id, or `None` when nobody is signed in.
    pub async fn get_person_id(&self) -> Result<Option<i32>, AppError> {
        let person_id = self.session.get::<i32>(SESSION_AUTH_PERSON_ID).await?;
        Ok(person_id)
    }

    /// Drops everything in the session. Logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
