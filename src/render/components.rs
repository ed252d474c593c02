//! Shared HTML fragments: page shell, cards, and the interactive widgets.
//!
//! Widgets are plain forms and links first. The inline scripts only upgrade
//! them (live search, background refresh, modal dialog).

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::blog::{Comment, Post};

pub const SITE_NAME: &str = "Posts App";

/// Content-Security-Policy header value. Inline styles and scripts only,
/// fetches and form posts back to this origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src data:; connect-src 'self'; form-action 'self'; frame-ancestors 'none'";

pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f3f4f6;--surface:#fff;--fg:#111827;--fg2:#4b5563;--fg3:#6b7280;--border:#e5e7eb;--accent:#2563eb;--accent-hover:#1d4ed8;--badge-bg:#dbeafe;--badge-fg:#1e40af;--pink:#e6007e;--purple:#7c3aed;--green:#16a34a;--green-hover:#15803d;--mono:ui-monospace,SFMono-Regular,Menlo,monospace}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:linear-gradient(135deg,#f9fafb,var(--bg));min-height:100vh;-webkit-font-smoothing:antialiased}
body:has(dialog[open]){overflow:hidden}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
svg.icon{width:20px;height:20px;flex-shrink:0;vertical-align:-4px}
.container{max-width:80rem;margin:0 auto;padding:2rem 1rem}
.container.narrow{max-width:56rem}
.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.5rem 1rem;border:none;border-radius:.5rem;font:inherit;font-weight:500;cursor:pointer;color:#fff;background:var(--accent);text-decoration:none}
.btn:hover{background:var(--accent-hover);text-decoration:none}
.btn.secondary{background:var(--border);color:var(--fg)}
.btn.green{background:var(--green)}
.btn.green:hover{background:var(--green-hover)}
.btn.purple{background:var(--purple)}
.btn:disabled{opacity:.6;cursor:not-allowed}
.btn.pending svg.icon{animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}

.home{min-height:100vh;display:flex;align-items:center;justify-content:center;text-align:center}
.home h1{font-size:3rem;font-weight:700;margin-bottom:1rem}
.home p{font-size:1.25rem;color:var(--fg2);margin-bottom:2rem}

.toolbar{display:flex;align-items:center;justify-content:space-between;margin-bottom:1rem}
.back{display:inline-flex;align-items:center;gap:.5rem;margin-bottom:2rem}
.toolbar .back{margin-bottom:0}
.page-title{font-size:2.25rem;font-weight:700;margin-bottom:.5rem}
.page-lead{color:var(--fg2);margin-bottom:2rem}

.search{position:relative;max-width:42rem;margin-bottom:2rem}
.search input{width:100%;padding:.85rem 3rem;font:inherit;border:1px solid var(--border);border-radius:9999px;background:var(--surface);color:var(--fg)}
.search input:focus{outline:2px solid var(--pink);outline-offset:1px}
.search .icon{position:absolute;left:1rem;top:.95rem;color:var(--fg3)}
.search .spinner{position:absolute;right:1rem;top:.85rem;width:1.5rem;height:1.5rem;border:2px solid var(--pink);border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite}

.grid{display:grid;grid-template-columns:1fr;gap:1.5rem}
@media(min-width:768px){.grid{grid-template-columns:1fr 1fr}}
@media(min-width:1024px){.grid{grid-template-columns:1fr 1fr 1fr}}
.card{display:block;height:100%;padding:1.5rem;background:var(--surface);border:1px solid var(--border);border-radius:.5rem;box-shadow:0 4px 6px rgba(0,0,0,.07);color:var(--fg)}
a.card:hover{box-shadow:0 20px 25px rgba(0,0,0,.1);text-decoration:none}
.card-head{display:flex;align-items:flex-start;justify-content:space-between;gap:.5rem;margin-bottom:.5rem}
.card-title{font-size:1.25rem;font-weight:600;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden}
.card-body{color:var(--fg2);display:-webkit-box;-webkit-line-clamp:3;-webkit-box-orient:vertical;overflow:hidden}
.card-meta{margin-top:1rem;font-size:.875rem;color:var(--fg3);display:flex;align-items:center;gap:.25rem}
.badge{padding:.15rem .6rem;font-size:.75rem;font-weight:500;background:var(--badge-bg);color:var(--badge-fg);border-radius:9999px;flex-shrink:0}
.empty{text-align:center;padding:3rem 0;color:var(--fg3);font-size:1.125rem}

.detail{padding:2rem;background:var(--surface);border-radius:.5rem;box-shadow:0 20px 25px rgba(0,0,0,.1)}
.detail h1{font-size:1.875rem;font-weight:700}
.detail .author{display:flex;align-items:center;gap:.5rem;color:var(--fg2);margin:1rem 0 1.5rem}
.detail .body{font-size:1.125rem;line-height:1.75;color:var(--fg2)}
.detail .actions{margin-top:2rem;padding-top:1.5rem;border-top:1px solid var(--border)}

.comments{margin-top:2.5rem}
.comments h2{font-size:1.5rem;font-weight:700;margin-bottom:1.25rem}
.comment-list{display:flex;flex-direction:column;gap:1rem}
.comment{display:flex;align-items:flex-start;gap:1rem;padding:1.5rem;background:var(--surface);border:1px solid var(--border);border-radius:1rem}
.avatar{width:3rem;height:3rem;border-radius:50%;flex-shrink:0;display:flex;align-items:center;justify-content:center;color:#fff;font-size:1.125rem;font-weight:700;background:linear-gradient(135deg,var(--pink),var(--purple))}
.comment-main{flex:1;min-width:0}
.comment-name{font-size:1.125rem;font-weight:600}
.comment-email{font-size:.875rem;color:var(--fg3);overflow:hidden;text-overflow:ellipsis;white-space:nowrap;margin-bottom:.5rem}
.comment-body{color:var(--fg2)}

dialog.modal{margin:auto;width:calc(100% - 2rem);max-width:42rem;max-height:80vh;border:none;border-radius:.5rem;background:var(--surface);color:var(--fg);box-shadow:0 25px 50px rgba(0,0,0,.25);overflow:hidden}
dialog.modal::backdrop{background:rgba(0,0,0,.5);backdrop-filter:blur(4px)}
.modal-head,.modal-foot{display:flex;align-items:center;justify-content:space-between;gap:.5rem;padding:1rem;border-bottom:1px solid var(--border)}
.modal-foot{justify-content:flex-end;border-bottom:none;border-top:1px solid var(--border)}
.modal-head h3{font-size:1.125rem;font-weight:600}
.modal-x{background:none;border:none;cursor:pointer;color:var(--fg3)}
.modal-content{padding:1rem;overflow-y:auto;max-height:calc(80vh - 140px)}
.modal-content pre{padding:1rem;border-radius:.5rem;background:var(--bg);font-family:var(--mono);font-size:.875rem;overflow-x:auto}

.status{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.status-box{max-width:28rem;width:100%;padding:2rem;text-align:center;background:var(--surface);border-radius:.5rem;box-shadow:0 20px 25px rgba(0,0,0,.1)}
.status-box h2{font-size:1.5rem;font-weight:700;margin-bottom:.5rem}
.status-box p{color:var(--fg2);margin-bottom:1.5rem}
.status-box .btn{display:flex;justify-content:center;margin-top:.75rem}
.status-code{font-size:3.75rem;font-weight:700;color:var(--accent);margin-bottom:1rem}
.status-icon{width:4rem;height:4rem;margin:0 auto 1rem;border-radius:50%;display:flex;align-items:center;justify-content:center;background:#fee2e2;color:#dc2626}
.status-box details{margin-top:1.5rem;text-align:left}
.status-box summary{cursor:pointer;font-size:.875rem;color:var(--fg3)}
.status-box details pre{margin-top:.5rem;padding:.75rem;font-size:.75rem;background:var(--bg);color:#dc2626;border-radius:.25rem;overflow-x:auto;white-space:pre-wrap}

@media(prefers-color-scheme:dark){
:root{--bg:#111827;--surface:#1f2937;--fg:#f9fafb;--fg2:#d1d5db;--fg3:#9ca3af;--border:#374151;--accent:#60a5fa;--accent-hover:#3b82f6;--badge-bg:#1e3a8a;--badge-fg:#bfdbfe}
body{background:linear-gradient(135deg,#111827,#1f2937)}
}
"#;

pub const ICON_USER: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"/></svg>"#;
pub const ICON_BACK: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18"/></svg>"#;
const ICON_SEARCH: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/></svg>"#;
const ICON_REFRESH: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/></svg>"#;
const ICON_CODE: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4"/></svg>"#;
const ICON_CLOSE: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/></svg>"#;
pub const ICON_WARNING: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"/></svg>"#;

/// Live search: swaps the list fragment as the user types. Keystrokes that
/// arrive while a request is pending are collapsed into one follow-up
/// request for the latest value.
pub const SEARCH_SCRIPT: &str = r#"
(function(){
var input=document.getElementById('search-input');
var list=document.getElementById('post-list');
var spinner=document.getElementById('search-pending');
if(!input||!list||!window.fetch)return;
var pending=false,queued=null;
function run(term){
pending=true;spinner.hidden=false;
var url=term?'/posts?q='+encodeURIComponent(term):'/posts';
history.replaceState(null,'',url);
fetch('/partial/posts?q='+encodeURIComponent(term))
.then(function(r){if(!r.ok)throw new Error(r.status);return r.text();})
.then(function(html){list.innerHTML=html;})
.catch(function(){window.location.href=url;})
.finally(function(){
pending=false;spinner.hidden=true;
if(queued!==null){var next=queued;queued=null;run(next);}
});
}
input.addEventListener('input',function(){
if(pending){queued=input.value;}else{run(input.value);}
});
})();
"#;

/// Refresh button: posts to the refresh action in the background, stays
/// disabled until it answers, then reloads the page.
pub const REFRESH_SCRIPT: &str = r#"
(function(){
var form=document.getElementById('refresh-form');
var button=document.getElementById('refresh-button');
var label=document.getElementById('refresh-label');
if(!form||!button||!window.fetch)return;
form.addEventListener('submit',function(e){
e.preventDefault();
if(button.disabled)return;
button.disabled=true;button.classList.add('pending');label.textContent='Actualisation...';
fetch('/api/refresh',{method:'POST'}).finally(function(){window.location.reload();});
});
})();
"#;

/// JSON modal: the open link falls back to the raw JSON route without script.
/// Escape and the close buttons are handled natively by `<dialog>`.
pub const MODAL_SCRIPT: &str = r#"
(function(){
var modal=document.getElementById('json-modal');
var open=document.getElementById('json-open');
if(!modal||!open||!modal.showModal)return;
open.addEventListener('click',function(e){e.preventDefault();modal.showModal();});
modal.addEventListener('click',function(e){if(e.target===modal)modal.close();});
var copy=document.getElementById('json-copy');
copy.addEventListener('click',function(){
navigator.clipboard.writeText(document.getElementById('json-content').textContent);
});
})();
"#;

/// Render the full HTML page shell. `inline_script` goes at the end of
/// `<body>`.
pub fn page_shell(
    title: &str,
    description: &str,
    body: Markup,
    inline_script: Option<&str>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body)
                @if let Some(source) = inline_script {
                    script { (PreEscaped(source)) }
                }
            }
        }
    }
}

/// Link to the post list, keeping the search term when there is one.
pub fn posts_href(query: &str) -> String {
    if query.is_empty() {
        "/posts".to_string()
    } else {
        format!("/posts?q={}", urlencoding::encode(query))
    }
}

pub fn back_link(href: &str, label: &str) -> Markup {
    html! {
        a class="back" href=(href) {
            (PreEscaped(ICON_BACK)) (label)
        }
    }
}

pub fn post_card(post: &Post) -> Markup {
    html! {
        a class="card" href={"/posts/" (post.id)} {
            div class="card-head" {
                h2 class="card-title" { (post.title) }
                span class="badge" { "#" (post.id) }
            }
            p class="card-body" { (post.body) }
            div class="card-meta" {
                (PreEscaped(ICON_USER)) "User " (post.user_id)
            }
        }
    }
}

pub fn comment_card(comment: &Comment) -> Markup {
    html! {
        article class="comment" {
            div class="avatar" { (comment.avatar_letter()) }
            div class="comment-main" {
                h3 class="comment-name" { (comment.name) }
                p class="comment-email" { (comment.email) }
                p class="comment-body" { (comment.body) }
            }
        }
    }
}

pub fn search_bar(query: &str) -> Markup {
    html! {
        form class="search" method="get" action="/posts" role="search" {
            (PreEscaped(ICON_SEARCH))
            input id="search-input" type="text" name="q" value=(query)
                placeholder="Rechercher par titre..." autocomplete="off";
            div id="search-pending" class="spinner" hidden {}
        }
    }
}

pub fn refresh_button(query: &str) -> Markup {
    html! {
        form id="refresh-form" method="post" action=(posts_href(query)) {
            button id="refresh-button" class="btn green" type="submit" {
                (PreEscaped(ICON_REFRESH))
                span id="refresh-label" { "Rafraîchir" }
            }
        }
    }
}

/// The "Voir le JSON brut" link and its dialog. `raw_href` serves the same
/// JSON when scripts are off.
pub fn json_modal(title: &str, json: &str, raw_href: &str) -> Markup {
    html! {
        a id="json-open" class="btn purple" href=(raw_href) {
            (PreEscaped(ICON_CODE)) "Voir le JSON brut"
        }
        dialog id="json-modal" class="modal" {
            div class="modal-head" {
                h3 { (title) }
                form method="dialog" {
                    button class="modal-x" aria-label="Fermer" { (PreEscaped(ICON_CLOSE)) }
                }
            }
            div class="modal-content" {
                pre { code id="json-content" { (json) } }
            }
            form class="modal-foot" method="dialog" {
                button id="json-copy" class="btn" type="button" { "Copier" }
                button class="btn secondary" { "Fermer" }
            }
        }
    }
}

/// Cut `s` to at most `max_len` bytes on a char boundary, appending "..."
/// when something was removed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
