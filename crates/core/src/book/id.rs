//! Book ID parsing.
//!
//! Route parameters arrive as raw strings; anything that is not a
//! well-formed UUID is reported as `MalformedId`, distinct from a lookup
//! that finds no row.

use uuid::Uuid;

use crate::error::StoreError;

/// Parse a raw route parameter into a book ID.
pub fn parse(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::MalformedId(raw.to_string()))
}
