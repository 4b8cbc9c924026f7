use thiserror::Error;

/// Failures a store operation can report.
///
/// `MalformedId` and `Database` are distinguishable from `NotFound` so
/// callers can log them differently, but the route layer treats all three
/// the same way (log + redirect).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("book {0} not found")]
    NotFound(String),

    #[error("malformed book id: {0:?}")]
    MalformedId(String),

    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
