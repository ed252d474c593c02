use std::fmt;
use std::sync::Arc;

use axum::extract::Request;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::state::State;

pub mod api;
mod health;
pub mod page;

/// The `q` search parameter shared by the list page, the live-search
/// fragment and the JSON list.
///
/// A repeated `q` keeps its first value; other parameters are ignored.
#[derive(Debug, Default)]
pub struct SearchQuery {
    pub q: String,
}

impl<'de> Deserialize<'de> for SearchQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SearchQueryVisitor;

        impl<'de> Visitor<'de> for SearchQueryVisitor {
            type Value = SearchQuery;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a query string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SearchQuery, A::Error> {
                let mut q = None;
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if key == "q" && q.is_none() {
                        q = Some(value);
                    }
                }
                Ok(SearchQuery {
                    q: q.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(SearchQueryVisitor)
    }
}

/// The complete application: pages, JSON API and health check, traced per
/// request, with trailing slashes trimmed before routing.
pub fn app(state: Arc<State>) -> NormalizePath<axum::Router> {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::span!(
            Level::INFO,
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .merge(page::route())
            .nest("/api", api::route())
            .route("/health", axum::routing::get(health::get))
            .layer(trace)
            .with_state(state),
    )
}

/// Serves [`app`] on `listener` until the server stops.
pub async fn serve(listener: tokio::net::TcpListener, state: Arc<State>) -> std::io::Result<()> {
    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app(state)),
    )
    .await
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, Response};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    pub fn state_for(base_url: &str) -> Arc<State> {
        Arc::new(State::new(Config::for_upstream(base_url)))
    }

    pub async fn send(state: Arc<State>, request: Request<Body>) -> Response<Body> {
        app(state).oneshot(request).await.expect("infallible")
    }

    pub async fn get(state: Arc<State>, uri: &str) -> Response<Body> {
        send(
            state,
            Request::get(uri).body(Body::empty()).expect("request"),
        )
        .await
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }
}
