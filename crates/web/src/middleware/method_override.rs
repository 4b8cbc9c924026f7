//! HTML form method override.
//!
//! Browsers only submit GET and POST, so the edit and delete forms post to
//! `?_method=PUT` / `?_method=DELETE` and this middleware rewrites the
//! method before routing. Runs on POST requests only; other methods pass
//! through untouched.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};

pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(method) = req.uri().query().and_then(override_from_query) {
            *req.method_mut() = method;
        }
    }
    next.run(req).await
}

fn override_from_query(query: &str) -> Option<Method> {
    let value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("_method="))?;
    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
