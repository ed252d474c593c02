//! Upstream responses kept for one revalidation interval.
//!
//! Concurrent misses on the same key share a single upstream request.
//! Failed fetches are not cached, so the next request tries again.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::api::{ApiClient, FetchError};
use crate::blog::{Comment, Post, PostID};

const POST_CAPACITY: u64 = 1_000;
const COMMENTS_CAPACITY: u64 = 1_000;

pub type FetchResult<T> = Result<T, Arc<FetchError>>;

#[derive(Debug)]
pub struct FetchCache {
    api: ApiClient,
    posts: Cache<(), Arc<Vec<Post>>>,
    post: Cache<PostID, Post>,
    comments: Cache<PostID, Arc<Vec<Comment>>>,
}

impl FetchCache {
    pub fn new(api: ApiClient, revalidate: Duration) -> Self {
        tracing::info!(
            upstream = %api.base_url(),
            revalidate_secs = revalidate.as_secs(),
            "fetch cache initialized"
        );

        Self {
            api,
            posts: Cache::builder().max_capacity(1).time_to_live(revalidate).build(),
            post: Cache::builder()
                .max_capacity(POST_CAPACITY)
                .time_to_live(revalidate)
                .build(),
            comments: Cache::builder()
                .max_capacity(COMMENTS_CAPACITY)
                .time_to_live(revalidate)
                .build(),
        }
    }

    pub async fn posts(&self) -> FetchResult<Arc<Vec<Post>>> {
        self.posts
            .try_get_with((), async {
                tracing::debug!("post list not cached, fetching");
                self.api.get_posts().await.map(Arc::new)
            })
            .await
    }

    pub async fn post(&self, post_id: PostID) -> FetchResult<Post> {
        self.post
            .try_get_with(post_id, async {
                tracing::debug!(post_id, "post not cached, fetching");
                self.api.get_post(post_id).await
            })
            .await
    }

    pub async fn comments(&self, post_id: PostID) -> FetchResult<Arc<Vec<Comment>>> {
        self.comments
            .try_get_with(post_id, async {
                tracing::debug!(post_id, "comments not cached, fetching");
                self.api.get_comments(post_id).await.map(Arc::new)
            })
            .await
    }

    /// Drops the cached post list so the next read goes upstream.
    pub async fn invalidate_posts(&self) {
        self.posts.invalidate(&()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeUpstream;

    fn cache_for(upstream: &FakeUpstream, revalidate: Duration) -> FetchCache {
        FetchCache::new(ApiClient::new(&upstream.base_url), revalidate)
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_secs(60));

        let first = cache.posts().await.unwrap();
        let second = cache.posts().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(upstream.hits(), 1);
    }

    #[tokio::test]
    async fn entries_expire_after_revalidate_interval() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_millis(50));

        cache.post(1).await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        cache.post(1).await.unwrap();

        assert_eq!(upstream.hits(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_secs(60));

        cache.posts().await.unwrap();
        cache.invalidate_posts().await;
        cache.posts().await.unwrap();

        assert_eq!(upstream.hits(), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_secs(60));

        upstream.set_failing(true);
        assert!(cache.posts().await.is_err());

        upstream.set_failing(false);
        assert_eq!(cache.posts().await.unwrap().len(), 3);
        assert_eq!(upstream.hits(), 2);
    }

    #[tokio::test]
    async fn posts_and_comments_are_keyed_by_id() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_secs(60));

        assert_eq!(cache.post(1).await.unwrap().title, "Alpha");
        assert_eq!(cache.post(3).await.unwrap().title, "Gamma");
        assert_eq!(cache.comments(1).await.unwrap().len(), 2);
        assert_eq!(cache.comments(2).await.unwrap().len(), 1);
        assert_eq!(upstream.hits(), 4);

        cache.post(1).await.unwrap();
        cache.comments(2).await.unwrap();
        assert_eq!(upstream.hits(), 4);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_request() {
        let upstream = FakeUpstream::spawn().await;
        let cache = cache_for(&upstream, Duration::from_secs(60));

        let (a, b, c) = tokio::join!(cache.posts(), cache.posts(), cache.posts());
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(upstream.hits(), 1);
    }
}
