//! Application State
//!
//! The state owns the single database handle. Each request locks it for the
//! length of one operation, so writes never overlap.

use crate::Database;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
pub struct AppState {
    /// Database handle, acquired per request
    pub db: Mutex<Database>,
}

impl AppState {
    /// Wraps an opened database
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    /// State backed by a fresh in-memory database (for testing)
    pub fn in_memory() -> crate::Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }
}
