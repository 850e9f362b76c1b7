use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set. Only `DATABASE_URL` is
    /// mandatory; everything else has a default or is optional.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
