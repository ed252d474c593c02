use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Redirect, Response};

use crate::blog::filter_by_title;
use crate::error::PageError;
use crate::render;
use crate::routes::SearchQuery;
use crate::state::SharedState;

pub(super) async fn get(
    State(state): SharedState,
    Query(search): Query<SearchQuery>,
) -> Result<Response, PageError> {
    let posts = state.cache.posts().await?;
    let matching = filter_by_title(&posts, &search.q);

    tracing::debug!(query = %search.q, total = posts.len(), matching = matching.len(), "listing posts");

    Ok(render::html_response(
        StatusCode::OK,
        render::posts::page(&search.q, &matching),
    ))
}

/// The card grid alone, for the live search box.
pub(super) async fn partial(
    State(state): SharedState,
    Query(search): Query<SearchQuery>,
) -> Result<Response, PageError> {
    let posts = state.cache.posts().await?;
    let matching = filter_by_title(&posts, &search.q);

    Ok(render::html_response(
        StatusCode::OK,
        render::posts::list(&search.q, &matching),
    ))
}

/// Form fallback of the refresh button: refresh, then back to the list.
pub(super) async fn refresh(
    State(state): SharedState,
    Query(search): Query<SearchQuery>,
) -> Redirect {
    state.refresh_posts().await;
    Redirect::to(&render::components::posts_href(&search.q))
}
