use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// An isolated test environment: one in-memory SQLite database and,
/// on demand, a session backed by it.
///
/// Both resources are opened on first access and live as long as the
/// context, so every test gets its own database and sessions never leak
/// between tests.
pub struct TestContext {
    /// Connection to this test's private in-memory database, opened by the
    /// first `database()` call.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same database, opened by the first `session()`
    /// call.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Opens the in-memory database on first call, then returns the same
    /// connection for the rest of the test.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        Ok(self.db.as_ref().expect("database just initialized"))
    }

    /// Runs the given CREATE TABLE statements against this test's database.
    ///
    /// Usually called through `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Opens the session on first call, then returns the same session for
    /// the rest of the test.
    ///
    /// The session store shares the test database's SQLite pool; its table is
    /// migrated here. Expiry matches the application default of seven days of
    /// inactivity.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().expect("session just initialized"))
    }

    /// Opens both resources and returns them together.
    ///
    /// Borrowing them through one call sidesteps the double mutable borrow
    /// that calling `database()` and `session()` separately would need.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((
            self.db.as_ref().expect("database just initialized"),
            self.session.as_ref().expect("session just initialized"),
        ))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
