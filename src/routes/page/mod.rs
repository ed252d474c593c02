use crate::state::NestedRouter;
use axum::routing::get;

mod home;
mod post;
mod posts;

pub fn route() -> NestedRouter {
    let html_compression_layer = tower_http::compression::CompressionLayer::new().br(true);

    axum::Router::new()
        .route("/", get(home::get))
        .route("/posts", get(posts::get).post(posts::refresh))
        .route("/posts/:id", get(post::get))
        .route("/partial/posts", get(posts::partial))
        .layer(html_compression_layer)
}
