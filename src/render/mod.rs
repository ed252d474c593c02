//! HTML rendering with [maud](https://maud.lambda.xyz/). All dynamic values
//! are escaped by the templates.

pub mod components;
pub mod home;
pub mod post;
pub mod posts;
pub mod status;

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use maud::Markup;

/// Wrap rendered markup in a response carrying the content type and
/// security headers every page shares.
pub fn html_response(status: StatusCode, markup: Markup) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    (status, headers, markup.into_string()).into_response()
}
