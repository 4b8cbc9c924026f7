use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sanitize::sanitize;

/// A book review record. Maps to the `books` PostgreSQL table.
///
/// Every field except `id` and `created_at` is optional: the schema imposes
/// no mandatory fields, and blank form inputs are stored as submitted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub rating: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Title for display, with a placeholder for untitled records.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }
}

/// The five mutable fields of a book, as carried by the create and update
/// operations. `id` and `created_at` are server-assigned and never pass
/// through here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookFields {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub rating: Option<String>,
}

impl BookFields {
    /// Strip markup from the free-text fields. Applied at the route boundary
    /// on create and update, never on read. `image` (a URL) and `rating` are
    /// stored as submitted.
    pub fn sanitized(self) -> Self {
        Self {
            title: self.title.as_deref().map(sanitize),
            image: self.image,
            description: self.description.as_deref().map(sanitize),
            review: self.review.as_deref().map(sanitize),
            rating: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_strips_markup_from_text_fields() {
        let fields = BookFields {
            title: Some("<script>alert(1)</script>Dune".to_string()),
            image: Some("https://example.com/dune.jpg".to_string()),
            description: Some("A <b>classic</b>".to_string()),
            review: Some("<img src=x onerror=alert(1)>Great".to_string()),
            rating: Some("5".to_string()),
        };

        let clean = fields.sanitized();
        assert_eq!(clean.title.as_deref(), Some("Dune"));
        assert_eq!(clean.description.as_deref(), Some("A classic"));
        assert_eq!(clean.review.as_deref(), Some("Great"));
        // URL and rating pass through untouched
        assert_eq!(clean.image.as_deref(), Some("https://example.com/dune.jpg"));
        assert_eq!(clean.rating.as_deref(), Some("5"));
    }

    #[test]
    fn sanitized_keeps_absent_fields_absent() {
        let clean = BookFields::default().sanitized();
        assert!(clean.title.is_none());
        assert!(clean.description.is_none());
        assert!(clean.review.is_none());
    }

    #[test]
    fn display_title_falls_back_for_blank_titles() {
        let book = Book {
            id: Uuid::now_v7(),
            title: Some(String::new()),
            image: None,
            description: None,
            review: None,
            rating: None,
            created_at: Utc::now(),
        };
        assert_eq!(book.display_title(), "Untitled");
    }
}
