use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::blog::PostID;
use crate::error::PageError;
use crate::render;
use crate::state::SharedState;

pub(super) async fn get(
    State(state): SharedState,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let Ok(post_id) = raw_id.parse::<PostID>() else {
        return Err(PageError::NotFound(raw_id));
    };

    let (post, comments) = tokio::join!(state.cache.post(post_id), state.cache.comments(post_id));

    let post = match post {
        Ok(it) => it,
        Err(err) => {
            tracing::debug!(post_id, error = %err, "post fetch failed");
            return Err(PageError::NotFound(raw_id));
        }
    };
    let comments = comments?;

    let json = serde_json::to_string_pretty(&post).map_err(anyhow::Error::from)?;

    Ok(render::html_response(
        StatusCode::OK,
        render::post::page(&post, &comments, &json),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::*;
    use crate::testing::FakeUpstream;

    #[tokio::test]
    async fn shows_post_with_its_comments() {
        let upstream = FakeUpstream::spawn().await;
        let response = get(state_for(&upstream.base_url), "/posts/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Alpha"));
        assert!(body.contains("Commentaires (2)"));
        assert!(body.contains("id labore ex et quam laborum"));
        assert!(!body.contains("odio adipisci rerum aut animi"));
        assert!(body.contains("&quot;userId&quot;: 2"));
    }

    #[tokio::test]
    async fn missing_post_is_not_found_page() {
        let upstream = FakeUpstream::spawn().await;
        let response = get(state_for(&upstream.base_url), "/posts/999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Article non trouvé"));
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found_without_fetching() {
        let upstream = FakeUpstream::spawn().await;
        let response = get(state_for(&upstream.base_url), "/posts/abc").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(upstream.hits(), 0);
    }

    #[tokio::test]
    async fn comments_failure_is_retry_page() {
        let upstream = FakeUpstream::spawn().await;
        let state = state_for(&upstream.base_url);
        state.cache.post(1).await.unwrap();
        upstream.set_failing(true);

        let response = get(state, "/posts/1").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_string(response).await.contains("Une erreur est survenue"));
    }

    #[tokio::test]
    async fn upstream_down_is_not_found_for_the_post() {
        let upstream = FakeUpstream::spawn().await;
        upstream.set_failing(true);
        let response = get(state_for(&upstream.base_url), "/posts/1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
