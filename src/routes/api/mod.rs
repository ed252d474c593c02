use crate::state::NestedRouter;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

mod posts;
mod refresh;

pub fn route() -> NestedRouter {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    axum::Router::new()
        .route("/posts", get(posts::list))
        .route("/posts/:id", get(posts::get))
        .route("/posts/:id/comments", get(posts::comments))
        .layer(cors)
        .route("/refresh", post(refresh::post))
}
