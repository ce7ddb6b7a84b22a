//! SQL DDL for the catalog tables.
//!
//! The deployed database is provisioned ahead of time — the maintenance
//! binary never creates tables. This module is the canonical copy of that
//! schema: tests build their in-memory databases from it, and fresh
//! databases are provisioned from it out-of-band.

use rusqlite::Connection;

use crate::errors::StoreError;

/// Run all catalog migrations.
///
/// Idempotent — safe to call multiple times (uses `IF NOT EXISTS`).
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(CATALOG_SCHEMA)?;
    Ok(())
}

/// Combined DDL for the catalog tables.
const CATALOG_SCHEMA: &str = r"
-- Authors table
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Categories table
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Books table
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES authors(id),
    category_id INTEGER NOT NULL REFERENCES categories(id),
    price_cents INTEGER NOT NULL,
    release_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_books_author
    ON books(author_id);
CREATE INDEX IF NOT EXISTS idx_books_category
    ON books(category_id);
CREATE INDEX IF NOT EXISTS idx_books_category_price
    ON books(category_id, price_cents);
";

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
