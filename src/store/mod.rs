//! Persistent store for saved queries.

mod schema;
mod sqlite;

pub use schema::create_schema;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No query with the given name exists.
    #[error("no query found with name {name}")]
    NotFound { name: String },

    /// A query with the given name already exists.
    #[error("a query named {name} already exists")]
    DuplicateName { name: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be decoded.
    #[error("invalid row data: {0}")]
    InvalidRow(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A saved query as stored in the database.
///
/// The `name` is the lookup key and is unique across all queries. Despite
/// the name, `body` is opaque text and not necessarily a database query.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedQuery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
}
