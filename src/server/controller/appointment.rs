use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{AppointmentDto, ChangeAppointmentDto, CreateAppointmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{Appointment, CreateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

fn into_dtos(appointments: Vec<Appointment>) -> Vec<AppointmentDto> {
    appointments.into_iter().map(Appointment::into_dto).collect()
}

/// Get a single appointment by id.
///
/// # Access Control
/// - `Admin` - Only admins can look up arbitrary appointments
#[utoipa::path(
    get,
    path = "/api/appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "The appointment", body = AppointmentDto),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db).get(&caller, id).await?;

    Ok(Json(appointment.into_dto()))
}

/// Get all appointments owned by a client.
///
/// # Access Control
/// - `Owner` - The caller's id must equal the requested owner id
#[utoipa::path(
    get,
    path = "/api/appointment/client/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Owner person id")),
    responses(
        (status = 200, description = "The owner's appointments", body = [AppointmentDto]),
        (status = 401, description = "Caller is not the requested owner", body = ErrorDto),
        (status = 404, description = "No person with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_by_owner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointments = AppointmentService::new(&state.db)
        .list_by_owner(&caller, id)
        .await?;

    Ok(Json(into_dtos(appointments)))
}

/// Get all pending client requests (status WAITING).
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/appointment/request/all",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All waiting appointments", body = [AppointmentDto]),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_requested(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointments = AppointmentService::new(&state.db)
        .list_requested(&caller)
        .await?;

    Ok(Json(into_dtos(appointments)))
}

/// Get all confirmed appointments (status ACCEPTED).
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/appointment/accepted/all",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All accepted appointments", body = [AppointmentDto]),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_accepted(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointments = AppointmentService::new(&state.db)
        .list_accepted(&caller)
        .await?;

    Ok(Json(into_dtos(appointments)))
}

/// Get all open negotiations (status MODIFY).
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/appointment/unconfirmed/all",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All unconfirmed appointments", body = [AppointmentDto]),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_unconfirmed(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointments = AppointmentService::new(&state.db)
        .list_unconfirmed(&caller)
        .await?;

    Ok(Json(into_dtos(appointments)))
}

/// Create a new appointment request.
///
/// The appointment starts in WAITING with the preferred slot from the body.
///
/// # Access Control
/// - `Owner` - The caller's id must equal the declared owner id
#[utoipa::path(
    post,
    path = "/api/appointment",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Created appointment", body = AppointmentDto),
        (status = 400, description = "Declared owner does not exist", body = ErrorDto),
        (status = 401, description = "Caller is not the declared owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let params = CreateAppointmentParams {
        owner_id: payload.owner,
        day_preferred: payload.day_preferred,
        hour_preferred: payload.hour_preferred,
        description: payload.description,
    };

    let appointment = AppointmentService::new(&state.db)
        .create(&caller, params)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// Accept the owner's preferred slot.
///
/// Copies the preferred slot into the selected fields and moves the
/// appointment to ACCEPTED. Only legal from WAITING or MODIFY.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/appointment/admin/accept/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Appointment is not waiting or unconfirmed", body = ErrorDto),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 409, description = "Appointment was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_accept_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db)
        .admin_accept(&caller, id)
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Propose an alternate slot; the appointment moves to MODIFY.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/appointment/admin/change/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    request_body = ChangeAppointmentDto,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Appointment is canceled", body = ErrorDto),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 409, description = "Appointment was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_change_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db)
        .admin_change(&caller, id, payload.into())
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Cancel an appointment. CANCELED is terminal.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/appointment/admin/cancel/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Appointment is already canceled", body = ErrorDto),
        (status = 401, description = "Caller is not signed in or not an admin", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 409, description = "Appointment was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_cancel_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db)
        .admin_cancel(&caller, id)
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Accept the slot on offer as the owning client.
///
/// # Access Control
/// - `Owner` - The caller must own the appointment
#[utoipa::path(
    patch,
    path = "/api/appointment/client/accept/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Appointment is canceled", body = ErrorDto),
        (status = 401, description = "Caller does not own this appointment", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 409, description = "Appointment was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn client_accept_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db)
        .client_accept(&caller, id)
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Re-request a different slot as the owning client.
///
/// The appointment returns to WAITING with the new preferred slot.
///
/// # Access Control
/// - `Owner` - The caller must own the appointment
#[utoipa::path(
    patch,
    path = "/api/appointment/client/change/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    request_body = ChangeAppointmentDto,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Appointment is canceled", body = ErrorDto),
        (status = 401, description = "Caller does not own this appointment", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 409, description = "Appointment was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn client_change_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let appointment = AppointmentService::new(&state.db)
        .client_change(&caller, id, payload.into())
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Delete an appointment.
///
/// # Access Control
/// - `Admin` or `Owner`
#[utoipa::path(
    delete,
    path = "/api/appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 401, description = "Caller is neither an admin nor the owner", body = ErrorDto),
        (status = 404, description = "No appointment with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    AppointmentService::new(&state.db).delete(&caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
