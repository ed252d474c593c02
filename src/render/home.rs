use maud::{html, Markup};

use super::components::{page_shell, SITE_NAME};

pub fn page() -> Markup {
    let body = html! {
        main class="home" {
            div {
                h1 { (SITE_NAME) }
                p { "Explorez une collection d'articles" }
                a class="btn" href="/posts" { "Voir les articles" }
            }
        }
    };

    page_shell(SITE_NAME, "Parcourez une collection d'articles", body, None)
}
