//! Startup warm-up of the first posts of the list, so their detail pages are
//! served from cache on first visit.

use std::sync::Arc;

use crate::blog::PostID;
use crate::state::cache::FetchResult;
use crate::state::State;

/// Fetches the post list, then the post and comments for each of the first
/// `config.prerender_count` posts concurrently. Returns the ids that were
/// warmed. Failures are logged and skipped.
pub async fn warm_first_posts(state: Arc<State>) -> Vec<PostID> {
    let count = state.config.prerender_count;
    if count == 0 {
        return Vec::new();
    }

    let posts = match state.cache.posts().await {
        Ok(it) => it,
        Err(err) => {
            tracing::warn!(error = %err, "could not fetch post list for warm-up");
            return Vec::new();
        }
    };

    async fn warm_post(state: Arc<State>, post_id: PostID) -> FetchResult<PostID> {
        let (post, comments) = tokio::join!(state.cache.post(post_id), state.cache.comments(post_id));
        post?;
        comments?;
        Ok(post_id)
    }

    let mut warm_set = tokio::task::JoinSet::new();
    for post in posts.iter().take(count) {
        warm_set.spawn(warm_post(state.clone(), post.id));
    }

    let mut warmed = Vec::with_capacity(warm_set.len());
    while let Some(joined) = warm_set.join_next().await {
        match joined {
            Ok(Ok(post_id)) => warmed.push(post_id),
            Ok(Err(err)) => tracing::warn!(error = %err, "could not warm post"),
            Err(err) => tracing::error!(error = %err, "warm-up task panicked"),
        }
    }
    warmed.sort_unstable();

    tracing::info!(warmed = warmed.len(), requested = count, "warmed post pages");
    warmed
}
