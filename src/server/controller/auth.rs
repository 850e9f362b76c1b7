use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SessionUserDto, SigninDto, SignupDto},
    },
    server::{
        data::person::PersonRepository,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::person::session_user_dto,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create a new client account.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = SessionUserDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let person = AuthService::new(&state.db)
        .signup(payload.displayname, payload.phone, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(session_user_dto(&person))))
}

/// Sign in with phone and password, establishing a session.
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "Signed in", body = SessionUserDto),
        (status = 401, description = "Wrong phone or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let person = AuthService::new(&state.db)
        .signin(&payload.phone, &payload.password)
        .await?;

    AuthSession::new(&session).set_person_id(person.id).await?;

    tracing::info!("Signin: person {}", person.id);

    Ok(Json(session_user_dto(&person)))
}

/// Get the currently signed-in identity.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in identity", body = SessionUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    // Authenticate resolves the caller, but the DTO needs the full record.
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let person = PersonRepository::new(&state.db)
        .find_by_id(caller.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {} not found", caller.id)))?;

    Ok(Json(session_user_dto(&person)))
}

/// Clear the current session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
