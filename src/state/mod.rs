use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;

pub mod cache;
pub mod refresh;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub cache: cache::FetchCache,
    refresh_pending: AtomicBool,
}

impl State {
    pub fn new(config: Config) -> State {
        let cache = cache::FetchCache::new(ApiClient::new(&config.api_url), config.revalidate);

        State {
            config,
            cache,
            refresh_pending: AtomicBool::new(false),
        }
    }
}
