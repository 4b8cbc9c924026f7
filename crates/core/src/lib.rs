//! Domain layer for the bookrack application: the `Book` record, input
//! sanitization, and the store abstraction with its Postgres and in-memory
//! implementations.

pub mod book;
pub mod error;
pub mod sanitize;
pub mod store;

pub use book::model::{Book, BookFields};
pub use error::StoreError;
pub use store::{BookStore, MemoryBookStore, PgBookStore};
