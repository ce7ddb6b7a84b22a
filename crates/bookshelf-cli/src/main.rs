//! # bookshelf-cli
//!
//! Catalog maintenance binary — loads settings, opens the database, and
//! runs the fixed maintenance pass over authors, categories, and books.
//!
//! The pass has no command-line surface and prints nothing to stdout; its
//! observable behavior is the side effects on the catalog database, with
//! progress reported on stderr via `tracing`.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

use bookshelf_store::{CatalogRepository, StoreError};

/// Author whose catalog entries are listed at the start of the pass.
const FEATURED_AUTHOR: &str = "J.K. Rowling";

/// Category cleared of its cheapest title.
const CLEARANCE_CATEGORY_ID: i64 = 2;

/// Percentage applied to every book price.
const PRICE_RAISE_PERCENT: i64 = 5;

/// Price band reported after the raise, in cents (10.00–20.00 inclusive).
const REPORT_MIN_CENTS: i64 = 1000;
const REPORT_MAX_CENTS: i64 = 2000;

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at startup. `RUST_LOG` takes precedence over the configured
/// level when set.
fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}

/// Run the fixed maintenance sequence over an open connection.
///
/// Five steps in strict order: list the featured author's books, clear the
/// cheapest title from the clearance category, raise all prices, report the
/// price band, and count books per author. Each statement auto-commits on
/// its own; there is no transaction spanning the pass.
fn run_maintenance(conn: &Connection) -> std::result::Result<(), StoreError> {
    let author = CatalogRepository::find_author_by_name(conn, FEATURED_AUTHOR)?
        .ok_or_else(|| StoreError::author_not_found(FEATURED_AUTHOR))?;
    let books = CatalogRepository::list_books_by_author(conn, author.id)?;
    info!(author = %author.name, author_id = author.id, count = books.len(), "listed featured author's books");

    let removed = CatalogRepository::delete_cheapest_in_category(conn, CLEARANCE_CATEGORY_ID)?;
    info!(category_id = CLEARANCE_CATEGORY_ID, removed, "cleared cheapest title in category");

    let updated = CatalogRepository::increase_all_prices(conn, PRICE_RAISE_PERCENT)?;
    info!(updated, percent = PRICE_RAISE_PERCENT, "raised book prices");

    let in_band = CatalogRepository::list_books_in_price_range(conn, REPORT_MIN_CENTS, REPORT_MAX_CENTS)?;
    info!(count = in_band.len(), min_cents = REPORT_MIN_CENTS, max_cents = REPORT_MAX_CENTS, "listed books in price band");

    let per_author = CatalogRepository::count_books_per_author(conn)?;
    info!(authors = per_author.len(), "counted books per author");

    Ok(())
}

fn main() -> Result<()> {
    // Load settings early (needed for the log level before subscriber init)
    let settings = bookshelf_settings::load_settings().context("Failed to load settings")?;
    init_subscriber(&settings.logging.level);

    let conn = bookshelf_store::open(&settings.database.path)
        .with_context(|| format!("Failed to open catalog database: {}", settings.database.path))?;

    run_maintenance(&conn).context("Maintenance pass failed")?;

    // Connection drops here — released unconditionally on normal exit
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
