//! The application error type and its HTTP mapping.
//!
//! Every failing endpoint produces the same shape: a status code plus a
//! `{kind, message}` JSON body, where `kind` is one of the stable
//! discriminators (`not_found`, `bad_request`, `unauthorized`, `conflict`,
//! `internal`). Handlers return `Result<_, AppError>` and the `IntoResponse`
//! impl here does the rest. Internal failures are logged server-side and
//! redacted to a generic message on the wire.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// The top-level error every fallible path converges on.
///
/// Infrastructure errors come in through `#[from]` conversions; the
/// `AuthError` variant delegates its response mapping; the four generic
/// variants at the bottom carry the message for their status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Startup configuration problem, e.g. a missing environment variable.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure; maps to 401 through `AuthError`'s own
    /// `IntoResponse`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// SeaORM failure. 500, with the detail logged rather than sent.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store failure.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Caller lacks the required role, or is not the owner of the target
    /// resource. Results in 401 with the provided message.
    #[error("{0}")]
    Unauthorized(String),

    /// Request conflicts with existing state (duplicate unique value, or a
    /// concurrent update won the race). Results in 409 with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    fn error_dto(kind: &str, message: String) -> Json<ErrorDto> {
        Json(ErrorDto {
            kind: kind.to_string(),
            message,
        })
    }
}

/// Status mapping: 400 `BadRequest`, 401 `Unauthorized` and `AuthErr`,
/// 404 `NotFound`, 409 `Conflict`, 500 everything else.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Self::error_dto("not_found", msg)).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Self::error_dto("bad_request", msg)).into_response()
            }
            Self::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Self::error_dto("unauthorized", msg)).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Self::error_dto("conflict", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback for errors with no specific mapping: logs the real error and
/// answers with a generic 500 so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            AppError::error_dto("internal", "Internal server error".to_string()),
        )
            .into_response()
    }
}
