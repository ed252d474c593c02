//! Errors surfaced by the HTML pages.
//!
//! Rendered as the retry or not-found screens rather than JSON, since these
//! handlers serve browsers.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::FetchError;
use crate::render;

/// Shown in the retry screen's details; the upstream URL stays in the logs.
const UPSTREAM_DETAILS: &str = "Le service des articles n'a pas répondu correctement.";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested post could not be fetched, or its id is not a number.
    #[error("post not found: {0}")]
    NotFound(String),

    /// An upstream fetch the page depends on failed.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] Arc<FetchError>),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(post) => {
                tracing::debug!(post = %post, "post not found");
                render::html_response(StatusCode::NOT_FOUND, render::status::not_found_page())
            }
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream fetch failed");
                render::html_response(
                    StatusCode::BAD_GATEWAY,
                    render::status::retry_page(UPSTREAM_DETAILS),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                render::html_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::status::retry_page(""),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_error() -> PageError {
        PageError::Upstream(Arc::new(FetchError::Status {
            url: "http://upstream/posts".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }))
    }

    #[test]
    fn error_display() {
        assert_eq!(
            PageError::NotFound("abc".to_string()).to_string(),
            "post not found: abc"
        );
        assert_eq!(
            upstream_error().to_string(),
            "upstream fetch failed: upstream answered 503 Service Unavailable for http://upstream/posts"
        );
    }

    #[test]
    fn not_found_is_404() {
        let response = PageError::NotFound("12".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upstream_is_502_without_the_upstream_url() {
        let response = upstream_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Une erreur est survenue"));
        assert!(body.contains("pas répondu correctement"));
        assert!(!body.contains("http://upstream"));
    }

    #[test]
    fn internal_is_500() {
        let response = PageError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
