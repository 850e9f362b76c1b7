use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, appointment, auth},
    server::{
        controller::appointment::{
            admin_accept_appointment, admin_cancel_appointment, admin_change_appointment,
            client_accept_appointment, client_change_appointment, create_appointment,
            delete_appointment, get_appointment, get_appointments_accepted,
            get_appointments_by_owner, get_appointments_requested, get_appointments_unconfirmed,
        },
        controller::auth::{get_user, logout, signin, signup},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::signup,
        crate::server::controller::auth::signin,
        crate::server::controller::auth::get_user,
        crate::server::controller::auth::logout,
        crate::server::controller::appointment::get_appointment,
        crate::server::controller::appointment::get_appointments_by_owner,
        crate::server::controller::appointment::get_appointments_requested,
        crate::server::controller::appointment::get_appointments_accepted,
        crate::server::controller::appointment::get_appointments_unconfirmed,
        crate::server::controller::appointment::create_appointment,
        crate::server::controller::appointment::admin_accept_appointment,
        crate::server::controller::appointment::admin_change_appointment,
        crate::server::controller::appointment::admin_cancel_appointment,
        crate::server::controller::appointment::client_accept_appointment,
        crate::server::controller::appointment::client_change_appointment,
        crate::server::controller::appointment::delete_appointment,
    ),
    components(schemas(
        api::ErrorDto,
        appointment::AppointmentDto,
        appointment::AppointmentStatusDto,
        appointment::ChangeAppointmentDto,
        appointment::CreateAppointmentDto,
        auth::SessionUserDto,
        auth::SigninDto,
        auth::SignupDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/logout", get(logout))
        .route(
            "/api/appointment/{id}",
            get(get_appointment).delete(delete_appointment),
        )
        .route("/api/appointment/client/{id}", get(get_appointments_by_owner))
        .route("/api/appointment/request/all", get(get_appointments_requested))
        .route("/api/appointment/accepted/all", get(get_appointments_accepted))
        .route(
            "/api/appointment/unconfirmed/all",
            get(get_appointments_unconfirmed),
        )
        .route("/api/appointment", post(create_appointment))
        .route(
            "/api/appointment/admin/accept/{id}",
            patch(admin_accept_appointment),
        )
        .route(
            "/api/appointment/admin/change/{id}",
            patch(admin_change_appointment),
        )
        .route(
            "/api/appointment/admin/cancel/{id}",
            patch(admin_cancel_appointment),
        )
        .route(
            "/api/appointment/client/accept/{id}",
            patch(client_accept_appointment),
        )
        .route(
            "/api/appointment/client/change/{id}",
            patch(client_change_appointment),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
