use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use bookrack_core::BookFields;

use crate::error::PageResult;
use crate::state::AppState;
use crate::views::{render, EditTemplate, IndexTemplate, NewTemplate, ShowTemplate};

/// Book pages. Every store failure (not found, malformed id, or a database
/// fault) is logged and answered with a redirect to a safe page, never an
/// error page.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/books", get(list_books).post(create_book))
        .route("/books/new", get(new_book_form))
        .route(
            "/books/{id}",
            get(show_book).put(update_book).delete(delete_book),
        )
        .route("/books/{id}/edit", get(edit_book_form))
}

/// Form body for create and update. The field names carry literal brackets,
/// matching the `book[...]` inputs the templates submit.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(rename = "book[title]", default)]
    title: Option<String>,
    #[serde(rename = "book[image]", default)]
    image: Option<String>,
    #[serde(rename = "book[description]", default)]
    description: Option<String>,
    #[serde(rename = "book[review]", default)]
    review: Option<String>,
    #[serde(rename = "book[rating]", default)]
    rating: Option<String>,
}

impl From<BookForm> for BookFields {
    fn from(form: BookForm) -> Self {
        BookFields {
            title: form.title,
            image: form.image,
            description: form.description,
            review: form.review,
            rating: form.rating,
        }
    }
}

/// A literal 302. Axum's `Redirect` helper emits 303/307; form posts here
/// must degrade to a GET of the target page the way a 302 does.
fn redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

async fn home() -> Response {
    redirect("/books")
}

async fn list_books(State(state): State<AppState>) -> PageResult<Response> {
    match state.store().list_all().await {
        Ok(books) => Ok(render(&IndexTemplate { books })?.into_response()),
        Err(err) => {
            tracing::warn!("Error fetching books: {err}");
            Ok(redirect("/"))
        }
    }
}

async fn new_book_form() -> PageResult<Response> {
    Ok(render(&NewTemplate)?.into_response())
}

async fn create_book(State(state): State<AppState>, Form(form): Form<BookForm>) -> Response {
    let fields = BookFields::from(form).sanitized();
    match state.store().create(fields).await {
        Ok(book) => {
            tracing::info!(id = %book.id, "created book");
            redirect("/books")
        }
        Err(err) => {
            tracing::warn!("Error creating book: {err}");
            redirect("/books/new")
        }
    }
}

async fn show_book(State(state): State<AppState>, Path(id): Path<String>) -> PageResult<Response> {
    match state.store().get(&id).await {
        Ok(book) => Ok(render(&ShowTemplate { book })?.into_response()),
        Err(err) => {
            tracing::warn!(%id, "Error fetching book details: {err}");
            Ok(redirect("/books"))
        }
    }
}

async fn edit_book_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Response> {
    match state.store().get(&id).await {
        Ok(book) => Ok(render(&EditTemplate { book })?.into_response()),
        Err(err) => {
            tracing::warn!(%id, "Error loading edit form: {err}");
            Ok(redirect("/books"))
        }
    }
}

async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> Response {
    let fields = BookFields::from(form).sanitized();
    match state.store().update(&id, fields).await {
        Ok(book) => redirect(&format!("/books/{}", book.id)),
        Err(err) => {
            tracing::warn!(%id, "Error updating book: {err}");
            redirect("/books")
        }
    }
}

/// A miss and a successful delete answer identically; the miss is only
/// logged.
async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if let Err(err) = state.store().delete(&id).await {
        tracing::warn!(%id, "Error deleting book: {err}");
    }
    redirect("/books")
}
