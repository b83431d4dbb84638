//! SQLite schema creation for the query store.

use rusqlite::Connection;

/// Creates the database schema for the query store.
///
/// Idempotent - calling it multiple times is safe.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS queries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            body TEXT NOT NULL
        );",
    )?;

    Ok(())
}
