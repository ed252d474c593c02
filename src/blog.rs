use serde::{Deserialize, Serialize};

pub type PostID = u64;
pub type UserID = u64;
pub type CommentID = u64;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

pub const DEFAULT_REVALIDATE: std::time::Duration = std::time::Duration::from_secs(60);
/// How many posts from the head of the list get warmed at startup.
pub const DEFAULT_PRERENDER_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: UserID,
    pub id: PostID,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostID,
    pub id: CommentID,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    /// Uppercased first character of the author name, shown as the avatar.
    pub fn avatar_letter(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Case-insensitive substring match on titles. An empty query keeps every post.
pub fn filter_by_title<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    if query.is_empty() {
        return posts.iter().collect();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_post(id: PostID, title: &str) -> Post {
    Post {
        user_id: id % 3 + 1,
        id,
        title: title.to_string(),
        body: format!("body of {title}"),
    }
}
