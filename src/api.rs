//! Client for the upstream posts API.
//!
//! Three single-shot calls, no retries. Any transport error, decode error or
//! non-2xx status fails the whole call.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::blog::{Comment, Post, PostID};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to upstream failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream answered {status} for {url}")]
    Status { url: String, status: StatusCode },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_json(format!("{}/posts", self.base_url), &[]).await
    }

    pub async fn get_post(&self, post_id: PostID) -> Result<Post, FetchError> {
        self.get_json(format!("{}/posts/{post_id}", self.base_url), &[])
            .await
    }

    pub async fn get_comments(&self, post_id: PostID) -> Result<Vec<Comment>, FetchError> {
        let mut comments: Vec<Comment> = self
            .get_json(
                format!("{}/comments", self.base_url),
                &[("postId", post_id.to_string())],
            )
            .await?;

        // upstream filtering is trusted but not relied on
        comments.retain(|comment| comment.post_id == post_id);
        Ok(comments)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        tracing::debug!(url = %url, "fetching from upstream");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "upstream returned non-success status");
            return Err(FetchError::Status { url, status });
        }

        Ok(response.json::<T>().await?)
    }
}
