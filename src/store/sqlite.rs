//! SQLite-backed query store.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{Connection, Row, params};
use std::fs;
use std::path::Path;

use super::{SavedQuery, StoreError, StoreResult, create_schema};

/// SQLite-backed store for saved queries.
///
/// Manages the database connection and provides CRUD operations over the
/// `queries` table. Opened once per process invocation by the dispatcher
/// and passed explicitly to every handler.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens an in-memory store with the schema created.
    ///
    /// Useful for testing; nothing is persisted.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens or creates the store at the given path.
    ///
    /// Creates parent directories if they don't exist. Initializes the
    /// schema if this is a new database.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts a new query.
    ///
    /// Fails with [`StoreError::DuplicateName`] if a query with the same
    /// name already exists.
    pub fn insert(&mut self, name: &str, body: &str) -> StoreResult<()> {
        match self.conn.execute(
            "INSERT INTO queries (name, body) VALUES (?1, ?2)",
            params![name, body],
        ) {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateName {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the body of the query matching `name`.
    ///
    /// Fails with [`StoreError::NotFound`] if no row matched, consistent
    /// with the lookup-based paths.
    pub fn update_body(&mut self, name: &str, new_body: &str) -> StoreResult<()> {
        let affected = self.conn.execute(
            "UPDATE queries SET body = ?1 WHERE name = ?2",
            params![new_body, name],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Removes the query matching `name`.
    ///
    /// Deleting a name that does not exist is not an error.
    pub fn delete(&mut self, name: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM queries WHERE name = ?1", params![name])?;
        Ok(())
    }

    /// Returns the query matching `name`.
    pub fn get(&self, name: &str) -> StoreResult<SavedQuery> {
        let result = self.conn.query_row(
            "SELECT id, name, created_at, body FROM queries WHERE name = ?1",
            params![name],
            row_to_query,
        );

        match result {
            Ok(row) => decode_row(row),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns all queries whose body contains `substring` literally,
    /// ordered by name.
    ///
    /// `%` and `_` in the term are escaped so the match is a plain
    /// substring match, not a pattern.
    pub fn search(&self, substring: &str) -> StoreResult<Vec<SavedQuery>> {
        let pattern = format!("%{}%", escape_like(substring));
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at, body FROM queries
             WHERE body LIKE ?1 ESCAPE '\\' ORDER BY name",
        )?;

        let rows = stmt.query_map(params![pattern], row_to_query)?;
        rows.map(|r| decode_row(r?)).collect()
    }

    /// Returns all queries, ordered by name.
    pub fn list(&self) -> StoreResult<Vec<SavedQuery>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at, body FROM queries ORDER BY name")?;

        let rows = stmt.query_map([], row_to_query)?;
        rows.map(|r| decode_row(r?)).collect()
    }

    /// Returns the number of stored queries.
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM queries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Raw row values before timestamp decoding.
type RawQuery = (i64, String, String, String);

fn row_to_query(row: &Row<'_>) -> rusqlite::Result<RawQuery> {
    Ok((
        row.get::<_, i64>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, String>(3)?,
    ))
}

fn decode_row((id, name, created_str, body): RawQuery) -> StoreResult<SavedQuery> {
    let created_at = parse_timestamp(&created_str).ok_or_else(|| {
        StoreError::InvalidRow(format!("invalid created_at timestamp: {created_str}"))
    })?;

    Ok(SavedQuery {
        id,
        name,
        created_at,
        body,
    })
}

/// Parses SQLite's CURRENT_TIMESTAMP format (UTC, no offset marker).
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .ok()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
