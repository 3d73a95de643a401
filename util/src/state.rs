//! Shared application state passed to axum handlers via `State<AppState>`.

use sea_orm::DatabaseConnection;

/// Central application state. Holds the SeaORM connection pool; cloning is
/// cheap because the underlying pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Cloned connection for spawned tasks that need ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
