use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Result of a manual refresh of the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub success: bool,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Set when another refresh was already running and this one was skipped.
    pub in_flight: bool,
}

/// Holds the pending flag for as long as it lives.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl super::State {
    /// Invalidates the cached post list and fetches it again. A refresh
    /// requested while one is already running returns immediately.
    pub async fn refresh_posts(&self) -> RefreshOutcome {
        let timestamp = chrono::Utc::now().timestamp_millis();

        let Some(_pending) = PendingGuard::acquire(&self.refresh_pending) else {
            tracing::debug!("refresh already in flight, skipping");
            return RefreshOutcome {
                success: true,
                timestamp,
                in_flight: true,
            };
        };

        self.cache.invalidate_posts().await;

        let success = match self.cache.posts().await {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "post list refreshed");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "post list refresh failed");
                false
            }
        };

        RefreshOutcome {
            success,
            timestamp,
            in_flight: false,
        }
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.refresh_pending.load(Ordering::Acquire)
    }
}
