use sea_orm::DatabaseConnection;

/// Shared application state, cloned into every handler by Axum's state
/// extraction. `DatabaseConnection` wraps a pool, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
