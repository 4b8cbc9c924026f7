//! Page templates, compiled into the binary by askama.
//!
//! Contexts mirror what each page needs: the list gets `books`, detail and
//! edit get a single `book`, the creation form gets nothing. Values are
//! HTML-escaped by the template engine at render time.

use askama::Template;
use axum::response::Html;

use bookrack_core::Book;

use crate::error::PageResult;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub books: Vec<Book>,
}

#[derive(Template)]
#[template(path = "show.html")]
pub struct ShowTemplate {
    pub book: Book,
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewTemplate;

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub book: Book,
}

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> PageResult<Html<String>> {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn book(title: &str) -> Book {
        Book {
            id: Uuid::now_v7(),
            title: Some(title.to_string()),
            image: None,
            description: Some("A desert planet".to_string()),
            review: None,
            rating: Some("5".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn index_lists_every_title() {
        let html = IndexTemplate {
            books: vec![book("Dune"), book("Hyperion")],
        }
        .render()
        .unwrap();
        assert!(html.contains("Dune"));
        assert!(html.contains("Hyperion"));
    }

    #[test]
    fn index_renders_with_no_books() {
        let html = IndexTemplate { books: vec![] }.render().unwrap();
        assert!(html.contains("No books yet"));
    }

    #[test]
    fn show_escapes_stored_text() {
        let mut b = book("Dune");
        b.description = Some("a < b".to_string());
        let html = ShowTemplate { book: b }.render().unwrap();
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn edit_prefills_the_form() {
        let b = book("Dune");
        let html = EditTemplate { book: b.clone() }.render().unwrap();
        assert!(html.contains("Dune"));
        assert!(html.contains(&format!("/books/{}?_method=PUT", b.id)));
    }

    #[test]
    fn new_form_posts_to_books() {
        let html = NewTemplate.render().unwrap();
        assert!(html.contains("action=\"/books\""));
        assert!(html.contains("book[title]"));
    }
}
