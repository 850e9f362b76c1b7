use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No signed-in person in the session.
    ///
    /// The request reached an endpoint that requires authentication without a
    /// session, or with a session that never completed signin. Results in a
    /// 401 Unauthorized response.
    #[error("Not signed in")]
    NotSignedIn,

    /// The session references a person that no longer exists.
    ///
    /// Happens when an account is deleted while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("Signed-in person {0} no longer exists")]
    PersonNotInDatabase(i32),

    /// Signin attempt with an unknown phone or a wrong password.
    ///
    /// The two cases are deliberately indistinguishable on the wire. Results
    /// in a 401 Unauthorized response.
    #[error("Wrong phone or password")]
    InvalidCredentials,
}

/// Every variant maps to 401 Unauthorized with kind `unauthorized`. The
/// `PersonNotInDatabase` detail is logged rather than sent to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::NotSignedIn => "Not signed in".to_string(),
            Self::PersonNotInDatabase(id) => {
                tracing::debug!("session references missing person {}", id);
                "Not signed in".to_string()
            }
            Self::InvalidCredentials => "Wrong phone or password".to_string(),
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                kind: "unauthorized".to_string(),
                message,
            }),
        )
            .into_response()
    }
}
