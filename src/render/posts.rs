//! The searchable post list.

use maud::{html, Markup};

use super::components::{
    back_link, page_shell, post_card, refresh_button, search_bar, REFRESH_SCRIPT, SEARCH_SCRIPT,
    SITE_NAME,
};
use crate::blog::Post;

/// Full list page. `posts` is already filtered by `query`.
pub fn page(query: &str, posts: &[&Post]) -> Markup {
    let body = html! {
        main class="container" {
            div class="toolbar" {
                (back_link("/", "Retour"))
                (refresh_button(query))
            }
            h1 class="page-title" { "Articles" }
            p class="page-lead" { "Explorez notre collection d'articles" }
            (search_bar(query))
            div id="post-list" { (list(query, posts)) }
        }
    };

    let title = if query.is_empty() {
        format!("Articles · {SITE_NAME}")
    } else {
        format!("« {query} » · Articles · {SITE_NAME}")
    };
    let script = format!("{SEARCH_SCRIPT}{REFRESH_SCRIPT}");

    page_shell(&title, "Liste des articles", body, Some(script.as_str()))
}

/// The card grid alone, also served to the live search.
pub fn list(query: &str, posts: &[&Post]) -> Markup {
    html! {
        @if posts.is_empty() {
            p class="empty" { "Aucun article trouvé pour \"" (query) "\"" }
        } @else {
            div class="grid" {
                @for post in posts {
                    (post_card(post))
                }
            }
        }
    }
}
