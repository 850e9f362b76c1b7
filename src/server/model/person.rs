//! Person domain types: the resolved caller identity and signup parameters.

use crate::model::auth::SessionUserDto;

pub use entity::person::Role;

/// The authenticated caller: the identity every engine operation is checked
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: i32,
    pub role: Role,
}

impl Caller {
    pub fn from_entity(entity: &entity::person::Model) -> Self {
        Self {
            id: entity.id,
            role: entity.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Parameters for creating a person account.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub displayname: String,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
}

/// Converts a person entity to the session-identity DTO.
pub fn session_user_dto(entity: &entity::person::Model) -> SessionUserDto {
    SessionUserDto {
        id: entity.id,
        displayname: entity.displayname.clone(),
        phone: entity.phone.clone(),
        is_admin: entity.role == Role::Admin,
    }
}
