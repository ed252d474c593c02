//! Post detail page with its comments and the raw JSON dialog.

use maud::{html, Markup, PreEscaped};

use super::components::{
    back_link, comment_card, json_modal, page_shell, truncate, ICON_USER, MODAL_SCRIPT, SITE_NAME,
};
use crate::blog::{Comment, Post};

/// `json` is the pretty-printed post shown in the dialog.
pub fn page(post: &Post, comments: &[Comment], json: &str) -> Markup {
    let body = html! {
        main class="container narrow" {
            (back_link("/posts", "Retour aux articles"))
            article class="detail" {
                div class="card-head" {
                    h1 { (post.title) }
                    span class="badge" { "#" (post.id) }
                }
                div class="author" {
                    (PreEscaped(ICON_USER))
                    span { "Utilisateur " (post.user_id) }
                }
                p class="body" { (post.body) }
                div class="actions" {
                    (json_modal(
                        &format!("Données JSON - Article #{}", post.id),
                        json,
                        &format!("/api/posts/{}", post.id),
                    ))
                }
            }
            section class="comments" {
                h2 { "Commentaires (" (comments.len()) ")" }
                @if comments.is_empty() {
                    p class="empty" { "Aucun commentaire pour cet article." }
                } @else {
                    div class="comment-list" {
                        @for comment in comments {
                            (comment_card(comment))
                        }
                    }
                }
            }
        }
    };

    page_shell(
        &format!("{} · {SITE_NAME}", post.title),
        &truncate(&post.body, 160),
        body,
        Some(MODAL_SCRIPT),
    )
}
