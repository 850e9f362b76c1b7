use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    /// Credentials used to seed the first admin account when none exists.
    pub admin_phone: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            admin_phone: std::env::var("ADMIN_PHONE").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
