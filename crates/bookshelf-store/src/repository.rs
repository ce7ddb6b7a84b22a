//! SQL data access layer for the catalog.
//!
//! All functions take a `&Connection` parameter and are stateless — pure
//! translations between Rust types and SQL. Every statement auto-commits
//! individually; nothing here opens a transaction.
//!
//! The joined book queries select each entity's columns under explicit
//! aliases (`a_id`, `a_name`, `c_id`, `c_name`) and the row converters read
//! them by name, so the mapping does not depend on column order.

use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::StoreError;
use crate::types::{Author, AuthorBookCount, Book, Category};

/// Shared SELECT for books joined with their author and category.
const BOOKS_JOINED_SELECT: &str = "SELECT b.id, b.title, b.author_id, b.category_id, \
            b.price_cents, b.release_date, \
            a.id AS a_id, a.name AS a_name, \
            c.id AS c_id, c.name AS c_name \
     FROM books b \
     JOIN authors a ON b.author_id = a.id \
     JOIN categories c ON b.category_id = c.id";

/// Catalog repository for the fixed maintenance queries.
pub struct CatalogRepository;

impl CatalogRepository {
    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// Look up an author by exact name.
    ///
    /// Returns `None` when no row matches. If several authors share the
    /// name, which one comes back is unspecified (no ORDER BY).
    pub fn find_author_by_name(
        conn: &Connection,
        name: &str,
    ) -> Result<Option<Author>, StoreError> {
        let author = conn
            .query_row(
                "SELECT id, name FROM authors WHERE name = ?1",
                params![name],
                |row| Ok(author_from_row(row)),
            )
            .optional()?;
        Ok(author)
    }

    /// List an author's books with author and category resolved.
    ///
    /// Row order is whatever the database returns. May be empty.
    pub fn list_books_by_author(
        conn: &Connection,
        author_id: i64,
    ) -> Result<Vec<Book>, StoreError> {
        let mut stmt = conn.prepare(&format!("{BOOKS_JOINED_SELECT} WHERE b.author_id = ?1"))?;
        let books = stmt
            .query_map(params![author_id], |row| Ok(book_from_joined_row(row)))?
            .filter_map(Result::ok)
            .collect();
        Ok(books)
    }

    /// List books priced within `[min_cents, max_cents]`, inclusive on both
    /// ends, with author and category resolved.
    ///
    /// An inverted range (`min > max`) is passed through unchanged and
    /// yields an empty result.
    pub fn list_books_in_price_range(
        conn: &Connection,
        min_cents: i64,
        max_cents: i64,
    ) -> Result<Vec<Book>, StoreError> {
        let mut stmt = conn.prepare(&format!(
            "{BOOKS_JOINED_SELECT} WHERE b.price_cents BETWEEN ?1 AND ?2"
        ))?;
        let books = stmt
            .query_map(params![min_cents, max_cents], |row| {
                Ok(book_from_joined_row(row))
            })?
            .filter_map(Result::ok)
            .collect();
        Ok(books)
    }

    /// Count books per author, excluding authors with no books.
    ///
    /// Result ordering is unspecified.
    pub fn count_books_per_author(conn: &Connection) -> Result<Vec<AuthorBookCount>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT a.id, a.name, COUNT(b.id) AS book_count \
             FROM authors a \
             LEFT JOIN books b ON a.id = b.author_id \
             GROUP BY a.id, a.name \
             HAVING COUNT(b.id) > 0",
        )?;
        let counts = stmt
            .query_map([], |row| {
                Ok(AuthorBookCount {
                    author_id: row.get(0)?,
                    name: row.get(1)?,
                    book_count: row.get(2)?,
                })
            })?
            .filter_map(Result::ok)
            .collect();
        Ok(counts)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────

    /// Delete the single cheapest book in a category.
    ///
    /// Ties on price break to the lowest book id, so repeated runs against
    /// the same data remove the same row. Returns `false` when the category
    /// has no books (a no-op, not an error).
    pub fn delete_cheapest_in_category(
        conn: &Connection,
        category_id: i64,
    ) -> Result<bool, StoreError> {
        let changed = conn.execute(
            "DELETE FROM books \
             WHERE id IN ( \
                 SELECT id FROM books \
                 WHERE category_id = ?1 \
                 ORDER BY price_cents ASC, id ASC \
                 LIMIT 1 \
             )",
            params![category_id],
        )?;
        Ok(changed > 0)
    }

    /// Raise every book's price by `percent`.
    ///
    /// Integer maths, rounded half-up to the cent. Returns the number of
    /// rows updated — zero for an empty table.
    pub fn increase_all_prices(conn: &Connection, percent: i64) -> Result<usize, StoreError> {
        let changed = conn.execute(
            "UPDATE books \
             SET price_cents = (price_cents * (100 + ?1) + 50) / 100",
            params![percent],
        )?;
        Ok(changed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row converters
// ─────────────────────────────────────────────────────────────────────────────

fn author_from_row(row: &rusqlite::Row<'_>) -> Author {
    Author {
        id: row.get_unwrap("id"),
        name: row.get_unwrap("name"),
    }
}

fn book_from_joined_row(row: &rusqlite::Row<'_>) -> Book {
    Book {
        id: row.get_unwrap("id"),
        title: row.get_unwrap("title"),
        author_id: row.get_unwrap("author_id"),
        category_id: row.get_unwrap("category_id"),
        price_cents: row.get_unwrap("price_cents"),
        release_date: row.get_unwrap("release_date"),
        author: Some(Author {
            id: row.get_unwrap("a_id"),
            name: row.get_unwrap("a_name"),
        }),
        category: Some(Category {
            id: row.get_unwrap("c_id"),
            name: row.get_unwrap("c_name"),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
