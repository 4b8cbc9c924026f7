use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::book::id;
use crate::book::model::{Book, BookFields};
use crate::error::StoreError;
use crate::store::BookStore;

/// PostgreSQL-backed book store. Concurrent writes are serialized by the
/// database; no application-level locking.
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, image, description, review, rating, created_at \
             FROM books ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn create(&self, fields: BookFields) -> Result<Book, StoreError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (id, title, image, description, review, rating, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, title, image, description, review, rating, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&fields.title)
        .bind(&fields.image)
        .bind(&fields.description)
        .bind(&fields.review)
        .bind(&fields.rating)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    async fn get(&self, raw_id: &str) -> Result<Book, StoreError> {
        let book_id = id::parse(raw_id)?;
        sqlx::query_as::<_, Book>(
            "SELECT id, title, image, description, review, rating, created_at \
             FROM books WHERE id = $1",
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(raw_id.to_string()))
    }

    async fn update(&self, raw_id: &str, fields: BookFields) -> Result<Book, StoreError> {
        let book_id = id::parse(raw_id)?;
        sqlx::query_as::<_, Book>(
            "UPDATE books \
             SET title = $2, image = $3, description = $4, review = $5, rating = $6 \
             WHERE id = $1 \
             RETURNING id, title, image, description, review, rating, created_at",
        )
        .bind(book_id)
        .bind(&fields.title)
        .bind(&fields.image)
        .bind(&fields.description)
        .bind(&fields.review)
        .bind(&fields.rating)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(raw_id.to_string()))
    }

    async fn delete(&self, raw_id: &str) -> Result<(), StoreError> {
        let book_id = id::parse(raw_id)?;
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(raw_id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
