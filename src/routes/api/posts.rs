use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::FetchError;
use crate::blog::{filter_by_title, Comment, Post, PostID};
use crate::routes::SearchQuery;
use crate::state::SharedState;

fn parse_id(raw_id: &str) -> Result<PostID, StatusCode> {
    raw_id.parse().map_err(|_| StatusCode::NOT_FOUND)
}

fn status_for(err: &Arc<FetchError>) -> StatusCode {
    match err.as_ref() {
        FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
            StatusCode::NOT_FOUND
        }
        _ => {
            tracing::error!(error = %err, "upstream fetch failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

pub(super) async fn list(
    State(state): SharedState,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Post>>, StatusCode> {
    let posts = state.cache.posts().await.map_err(|err| status_for(&err))?;

    Ok(Json(
        filter_by_title(&posts, &search.q)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

pub(super) async fn get(
    State(state): SharedState,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, StatusCode> {
    let post_id = parse_id(&raw_id)?;
    state
        .cache
        .post(post_id)
        .await
        .map(Json)
        .map_err(|err| status_for(&err))
}

pub(super) async fn comments(
    State(state): SharedState,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    let post_id = parse_id(&raw_id)?;
    let comments = state
        .cache
        .comments(post_id)
        .await
        .map_err(|err| status_for(&err))?;

    Ok(Json(comments.as_ref().clone()))
}
