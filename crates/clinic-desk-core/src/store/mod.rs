//! Persistence layer for clinic-desk.
//!
//! The store is a single-process, synchronous key-value table: one JSON
//! array per entity collection, read and rewritten whole on every
//! mutation. Missing or corrupt payloads degrade to an empty collection
//! (logged), never an error; callers see the same shape either way.

mod appointments;
mod attendance;
mod billing;
mod patients;
mod salaries;
mod schema;
mod staff;

pub use appointments::*;
#[allow(unused_imports)]
pub use attendance::*;
pub use billing::*;
pub use patients::*;
#[allow(unused_imports)]
pub use salaries::*;
pub use schema::*;
#[allow(unused_imports)]
pub use staff::*;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store over an embedded SQLite database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at path, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Initialize schema.
    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Read a whole collection. Absent keys and unparseable payloads both
    /// yield an empty collection; the latter is logged and the bad payload
    /// is left in place until the next write replaces it.
    pub fn read_collection<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Vec<T>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE name = ?",
                [name],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(Vec::new()),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(records) => Ok(records),
                Err(err) => {
                    warn!(collection = name, %err, "discarding corrupt collection payload");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Serialize and store a whole collection, replacing any previous value.
    pub fn write_collection<T: Serialize>(&self, name: &str, records: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(records)?;
        self.conn.execute(
            r#"
            INSERT INTO collections (name, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![name, payload],
        )?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
