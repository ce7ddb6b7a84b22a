//! # bookshelf-store
//!
//! SQL data access for the bookshelf catalog with `SQLite` persistence.
//!
//! Provides the catalog schema, single-connection acquisition, and the
//! [`CatalogRepository`] query functions over authors, categories, and books.

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod repository;
pub mod schema;
pub mod types;

pub use connection::{open, open_in_memory};
pub use errors::StoreError;
pub use repository::CatalogRepository;
pub use types::{Author, AuthorBookCount, Book, Category};
