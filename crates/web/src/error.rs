use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures the page layer itself can produce.
///
/// Store failures never reach this type; route handlers convert them into
/// redirects. Template rendering is the exception: a render fault has no
/// safe page to fall back to, so it surfaces as a plain 500.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Page error: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong rendering this page.",
        )
            .into_response()
    }
}

/// Convenience type alias for route handlers.
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_maps_to_internal_server_error() {
        let error = PageError::Render(askama::Error::Fmt(std::fmt::Error));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
