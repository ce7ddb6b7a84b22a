//! Catalog entity types.
//!
//! Rows are mapped into these records fresh on every query — there is no
//! caching and no identity map. Prices are integer cents throughout; the
//! money path never touches floating point.

/// An author row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    /// Identity column.
    pub id: i64,
    /// Author display name.
    pub name: String,
}

/// A category row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Identity column.
    pub id: i64,
    /// Category display name.
    pub name: String,
}

/// A book row, optionally carrying its resolved author and category.
///
/// `author` and `category` are populated only by the joined queries and are
/// scoped to that query result — they are not a persisted relationship.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// Identity column.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Foreign key into `authors`.
    pub author_id: i64,
    /// Foreign key into `categories`.
    pub category_id: i64,
    /// Price in integer cents.
    pub price_cents: i64,
    /// Release date as an ISO 8601 string.
    pub release_date: String,
    /// Resolved author, when the query joined it.
    pub author: Option<Author>,
    /// Resolved category, when the query joined it.
    pub category: Option<Category>,
}

/// Per-author book count — the output shape of the grouped count query.
/// Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorBookCount {
    /// Author identity column.
    pub author_id: i64,
    /// Author display name.
    pub name: String,
    /// Number of books referencing this author.
    pub book_count: i64,
}
