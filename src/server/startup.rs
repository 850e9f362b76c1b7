use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::person::PersonRepository,
    error::AppError,
    model::person::SignupParams,
    service::auth,
};

/// Opens the SQLite connection pool and brings the schema up to date.
///
/// Migrations run here, before anything else touches the database.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// The session store shares the SQLite pool with the SeaORM connection; its
/// table is migrated here. Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Session layer ready to be applied to the router
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Ensures at least one admin account exists.
///
/// When the database holds no admin person, an admin is seeded from the
/// `ADMIN_PHONE`/`ADMIN_PASSWORD` configuration. Without those variables the
/// gap is logged and startup continues; admin-gated endpoints will reject
/// every caller until an admin exists.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let person_repo = PersonRepository::new(db);

    if person_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(phone), Some(password)) = (&config.admin_phone, &config.admin_password) else {
        tracing::warn!("No admin account exists and ADMIN_PHONE/ADMIN_PASSWORD are not set");
        return Ok(());
    };

    if person_repo.find_by_phone(phone).await?.is_some() {
        tracing::warn!("ADMIN_PHONE is already taken by a non-admin account");
        return Ok(());
    }

    let admin = person_repo
        .create(SignupParams {
            displayname: "Administrator".to_string(),
            phone: phone.clone(),
            password_hash: auth::hash_password(password),
            role: entity::person::Role::Admin,
        })
        .await?;

    tracing::info!("Seeded initial admin account (person {})", admin.id);

    Ok(())
}
