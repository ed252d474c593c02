//! Retry and not-found screens.

use maud::{html, Markup, PreEscaped};

use super::components::{page_shell, ICON_WARNING, SITE_NAME};

/// Generic "upstream failed" screen. `error_message` is shown folded.
pub fn retry_page(error_message: &str) -> Markup {
    let body = html! {
        main class="status" {
            div class="status-box" {
                div class="status-icon" { (PreEscaped(ICON_WARNING)) }
                h2 { "Une erreur est survenue" }
                p { "Impossible de charger les articles. Veuillez réessayer." }
                // empty href reloads the current URL
                a class="btn" href="" { "Réessayer" }
                a class="btn secondary" href="/" { "Retour à l'accueil" }
                @if !error_message.is_empty() {
                    details {
                        summary { "Détails de l'erreur" }
                        pre { (error_message) }
                    }
                }
            }
        }
    };

    page_shell(&format!("Erreur · {SITE_NAME}"), "Une erreur est survenue", body, None)
}

pub fn not_found_page() -> Markup {
    let body = html! {
        main class="status" {
            div class="status-box" {
                div class="status-code" { "404" }
                h2 { "Article non trouvé" }
                p { "L'article que vous recherchez n'existe pas ou a été supprimé." }
                a class="btn" href="/posts" { "Voir tous les articles" }
                a class="btn secondary" href="/" { "Retour à l'accueil" }
            }
        }
    };

    page_shell(&format!("Article non trouvé · {SITE_NAME}"), "Article non trouvé", body, None)
}
