//! Single `SQLite` connection with WAL mode and foreign keys enabled.
//!
//! The utility runs strictly sequentially over one connection, so there is
//! no pool — callers open the connection at startup, thread `&Connection`
//! through the repository functions, and drop it when the run completes.

use rusqlite::Connection;

use crate::errors::StoreError;

/// Pragmas applied to every connection on open.
const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL;\
     PRAGMA busy_timeout = 5000;\
     PRAGMA foreign_keys = ON;\
     PRAGMA synchronous = NORMAL;";

/// Open a file-backed connection to the catalog database.
pub fn open(path: &str) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

/// Open an in-memory connection (for testing).
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
