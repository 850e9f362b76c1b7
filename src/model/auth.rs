use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub displayname: String,
    pub phone: String,
    pub password: String,
}

/// Body for `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninDto {
    pub phone: String,
    pub password: String,
}

/// The signed-in identity as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub id: i32,
    pub displayname: String,
    pub phone: String,
    pub is_admin: bool,
}
