use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `kind` is a stable machine-readable discriminator (`not_found`,
/// `bad_request`, `unauthorized`, `conflict`, `internal`); `message` is
/// human-readable detail.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub kind: String,
    pub message: String,
}
