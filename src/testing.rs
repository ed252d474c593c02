//! Fake upstream API for tests, served by axum on an ephemeral local port.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;

use crate::blog::{sample_post, Comment, Post, PostID};

#[derive(Debug, Default)]
struct Upstream {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    hits: AtomicUsize,
    failing: AtomicBool,
}

pub struct FakeUpstream {
    pub base_url: String,
    inner: Arc<Upstream>,
}

impl FakeUpstream {
    /// Three posts titled "Alpha", "beta", "Gamma" with ids 1..=3, two
    /// comments on post 1 and one on post 2.
    pub async fn spawn() -> Self {
        Self::spawn_with(
            vec![
                sample_post(1, "Alpha"),
                sample_post(2, "beta"),
                sample_post(3, "Gamma"),
            ],
            vec![
                sample_comment(1, 1, "id labore ex et quam laborum"),
                sample_comment(1, 2, "quo vero reiciendis velit similique earum"),
                sample_comment(2, 3, "odio adipisci rerum aut animi"),
            ],
        )
        .await
    }

    pub async fn spawn_with(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        let inner = Arc::new(Upstream {
            posts,
            comments,
            ..Default::default()
        });

        let app = axum::Router::new()
            .route("/posts", get(list_posts))
            .route("/posts/:id", get(one_post))
            .route("/comments", get(all_comments))
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let addr = listener.local_addr().expect("fake upstream address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("fake upstream should serve")
        });

        Self {
            base_url: format!("http://{addr}"),
            inner,
        }
    }

    /// Number of requests answered so far.
    pub fn hits(&self) -> usize {
        self.inner.hits.load(Ordering::SeqCst)
    }

    /// While set, every endpoint answers 500.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }
}

/// A base URL on which nothing listens.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn sample_comment(post_id: PostID, id: u64, name: &str) -> Comment {
    Comment {
        post_id,
        id,
        name: name.to_string(),
        email: format!("reader{id}@example.org"),
        body: format!("comment {id} on post {post_id}"),
    }
}

fn answer(upstream: &Upstream) -> Result<(), StatusCode> {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    if upstream.failing.load(Ordering::SeqCst) {
        Err(StatusCode::INTERNAL_SERVER_ERROR)
    } else {
        Ok(())
    }
}

async fn list_posts(State(upstream): State<Arc<Upstream>>) -> Result<Json<Vec<Post>>, StatusCode> {
    answer(&upstream)?;
    Ok(Json(upstream.posts.clone()))
}

async fn one_post(
    State(upstream): State<Arc<Upstream>>,
    Path(post_id): Path<PostID>,
) -> Result<Json<Post>, StatusCode> {
    answer(&upstream)?;
    upstream
        .posts
        .iter()
        .find(|post| post.id == post_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// ignores `postId` so the client-side filter is what gets exercised
async fn all_comments(
    State(upstream): State<Arc<Upstream>>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    answer(&upstream)?;
    Ok(Json(upstream.comments.clone()))
}
