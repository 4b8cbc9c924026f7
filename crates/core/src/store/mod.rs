//! The book record store.
//!
//! `BookStore` is the seam between route handlers and persistence: the
//! production store runs on PostgreSQL, and an in-memory store backs the
//! handler tests. The store is the sole owner of book records; nothing
//! above it caches or duplicates them.

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::book::model::{Book, BookFields};
use crate::error::StoreError;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, newest first (`created_at` descending). Empty when none
    /// exist; no pagination.
    async fn list_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Insert a new book with the supplied fields plus a server-assigned
    /// `id` and `created_at`. Returns the created record.
    async fn create(&self, fields: BookFields) -> Result<Book, StoreError>;

    /// The book matching `id`. `MalformedId` if `id` is not a well-formed
    /// identifier, `NotFound` if no record matches.
    async fn get(&self, id: &str) -> Result<Book, StoreError>;

    /// Replace the mutable fields of the book matching `id`. `id` and
    /// `created_at` never change. Returns the updated record.
    async fn update(&self, id: &str, fields: BookFields) -> Result<Book, StoreError>;

    /// Remove the book matching `id`.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Verify store connectivity, for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
