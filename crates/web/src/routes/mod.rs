pub mod books;
pub mod health;

use axum::{middleware::from_fn, Router};
use tower::Layer;
use tower_http::services::ServeDir;

use crate::middleware::method_override::method_override;
use crate::state::AppState;

/// Assemble the full router: book pages, health check, and static assets.
/// The method-override middleware sits outside routing so rewritten PUT and
/// DELETE requests reach the right handlers.
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .merge(books::routes())
        .merge(health::routes())
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state);
    // `Router::layer` runs after route matching, so the override must wrap
    // the router itself for the rewritten method to be routed.
    Router::new().fallback_service(from_fn(method_override).layer(app))
}
