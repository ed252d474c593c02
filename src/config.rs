//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. "0.0.0.0:8010").
    pub bind_addr: String,

    /// Base URL of the upstream posts API, without trailing slash.
    pub api_url: String,

    /// How long a fetched upstream response may be served before it is
    /// refetched.
    pub revalidate: Duration,

    /// Number of posts, from the head of the list, warmed at startup.
    pub prerender_count: usize,
}

impl Config {
    /// Load configuration from environment variables. Every variable is
    /// optional:
    ///
    /// - `POSTS_BIND_ADDR` (default: "0.0.0.0:8010")
    /// - `POSTS_API_URL` (default: "https://jsonplaceholder.typicode.com")
    /// - `POSTS_REVALIDATE_SECS` (default: 60)
    /// - `POSTS_PRERENDER_COUNT` (default: 10, 0 disables warm-up)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("POSTS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8010".to_string());

        let api_url = std::env::var("POSTS_API_URL")
            .unwrap_or_else(|_| crate::blog::DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let revalidate = match std::env::var("POSTS_REVALIDATE_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("POSTS_REVALIDATE_SECS is not a number: {secs:?}"))?,
            ),
            Err(_) => crate::blog::DEFAULT_REVALIDATE,
        };

        let prerender_count = match std::env::var("POSTS_PRERENDER_COUNT") {
            Ok(count) => count
                .trim()
                .parse()
                .with_context(|| format!("POSTS_PRERENDER_COUNT is not a number: {count:?}"))?,
            Err(_) => crate::blog::DEFAULT_PRERENDER_COUNT,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            api_url = %api_url,
            revalidate_secs = revalidate.as_secs(),
            prerender_count,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_url,
            revalidate,
            prerender_count,
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_upstream(api_url: &str) -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            api_url: api_url.to_string(),
            revalidate: crate::blog::DEFAULT_REVALIDATE,
            prerender_count: 0,
        }
    }
}
