//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - menu_items(id, description, name, price, image_id)
//! - carts(host)
//! - cart_items(id, cart_host, menu_item_id)
//! - images(id, data)
//!
//! There is no process-wide session. A [`Database`] owns one connection and
//! the catalog, cart and image operations borrow it for the length of a call.

pub mod schema;

use crate::Result;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::{
    ops::{Deref, DerefMut},
    path::Path,
};

/// Owned handle on the backing SQLite database
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a database file (creates it and its parent directory if needed)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        tracing::info!("Opened database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }
}

impl Deref for Database {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl DerefMut for Database {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

/// Starts the write transaction every mutating operation runs in.
///
/// `IMMEDIATE` takes the write lock up front so a read-then-write sequence
/// cannot interleave with another writer on the same file.
pub(crate) fn begin_write(conn: &mut Connection) -> Result<Transaction<'_>> {
    Ok(conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
}
