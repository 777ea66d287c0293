//! Restaurant Ordering Library
//!
//! This library provides the data-access layer for a restaurant ordering
//! application: a menu catalog, per-host carts and an image store, all backed
//! by SQLite, plus the HTTP routes that expose them.

// Domain modules
pub mod cart;
pub mod image;
pub mod menu;

// Infrastructure
pub mod config;
pub mod db;
pub mod router;
pub mod state;

pub use db::Database;

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for data-access operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Cart not found: {0}")]
    CartNotFound(String),

    #[error("Image not found: {0}")]
    ImageNotFound(i64),
}

impl Error {
    /// Whether this error reports a missing record rather than a store failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::MenuItemNotFound(_) | Error::CartNotFound(_) | Error::ImageNotFound(_)
        )
    }
}
