//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds no mutable data.

use std::time::Duration;

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Safe for concurrent use by every repository without extra locking.
    pub db: DatabaseConnection,

    /// Deadline applied to each store-bound request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `request_timeout` - Per-request deadline
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, request_timeout: Duration) -> Self {
        Self {
            db,
            request_timeout,
        }
    }
}
