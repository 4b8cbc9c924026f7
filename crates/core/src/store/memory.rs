use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::book::id;
use crate::book::model::{Book, BookFields};
use crate::error::StoreError;
use crate::store::BookStore;

/// In-memory book store backing handler and integration tests. Same
/// contract as `PgBookStore`, no database required.
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<HashMap<Uuid, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let mut books: Vec<Book> = self.books.read().await.values().cloned().collect();
        books.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(books)
    }

    async fn create(&self, fields: BookFields) -> Result<Book, StoreError> {
        let book = Book {
            id: Uuid::now_v7(),
            title: fields.title,
            image: fields.image,
            description: fields.description,
            review: fields.review,
            rating: fields.rating,
            created_at: Utc::now(),
        };
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn get(&self, raw_id: &str) -> Result<Book, StoreError> {
        let book_id = id::parse(raw_id)?;
        self.books
            .read()
            .await
            .get(&book_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(raw_id.to_string()))
    }

    async fn update(&self, raw_id: &str, fields: BookFields) -> Result<Book, StoreError> {
        let book_id = id::parse(raw_id)?;
        let mut books = self.books.write().await;
        let book = books
            .get_mut(&book_id)
            .ok_or_else(|| StoreError::NotFound(raw_id.to_string()))?;
        book.title = fields.title;
        book.image = fields.image;
        book.description = fields.description;
        book.review = fields.review;
        book.rating = fields.rating;
        Ok(book.clone())
    }

    async fn delete(&self, raw_id: &str) -> Result<(), StoreError> {
        let book_id = id::parse(raw_id)?;
        self.books
            .write()
            .await
            .remove(&book_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(raw_id.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> BookFields {
        BookFields {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let store = MemoryBookStore::new();
        let before = Utc::now();
        let book = store.create(fields("Dune")).await.unwrap();

        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert!(book.created_at >= before);

        let fetched = store.get(&book.id.to_string()).await.unwrap();
        assert_eq!(fetched.id, book.id);
    }

    #[tokio::test]
    async fn list_all_orders_newest_first() {
        let store = MemoryBookStore::new();
        let first = store.create(fields("first")).await.unwrap();
        let second = store.create(fields("second")).await.unwrap();
        let third = store.create(fields("third")).await.unwrap();

        let books = store.list_all().await.unwrap();
        assert_eq!(
            books.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![third.id, second.id, first.id]
        );
    }

    #[tokio::test]
    async fn list_all_is_empty_without_books() {
        let store = MemoryBookStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_nonexistent_id_is_not_found() {
        let store = MemoryBookStore::new();
        let err = store.get(&Uuid::now_v7().to_string()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_malformed_id_is_distinct_from_not_found() {
        let store = MemoryBookStore::new();
        let err = store.get("oops").await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedId(_)));
    }

    #[tokio::test]
    async fn update_replaces_mutable_fields_only() {
        let store = MemoryBookStore::new();
        let book = store.create(fields("Dune")).await.unwrap();

        let updated = store
            .update(
                &book.id.to_string(),
                BookFields {
                    title: Some("Dune Messiah".to_string()),
                    rating: Some("4".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("Dune Messiah"));
        assert_eq!(updated.rating.as_deref(), Some("4"));
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.created_at, book.created_at);
    }

    #[tokio::test]
    async fn update_nonexistent_id_leaves_store_unchanged() {
        let store = MemoryBookStore::new();
        let book = store.create(fields("Dune")).await.unwrap();

        let err = store
            .update(&Uuid::now_v7().to_string(), fields("Other"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let kept = store.get(&book.id.to_string()).await.unwrap();
        assert_eq!(kept.title.as_deref(), Some("Dune"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let store = MemoryBookStore::new();
        let book = store.create(fields("Dune")).await.unwrap();

        store.delete(&book.id.to_string()).await.unwrap();

        let err = store.get(&book.id.to_string()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_nonexistent_id_is_not_found() {
        let store = MemoryBookStore::new();
        let err = store.delete(&Uuid::now_v7().to_string()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
