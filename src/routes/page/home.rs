use axum::http::StatusCode;
use axum::response::Response;

pub(super) async fn get() -> Response {
    crate::render::html_response(StatusCode::OK, crate::render::home::page())
}
