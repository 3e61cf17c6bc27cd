use crate::auth::AuthContext;
use crate::notices::Notice;
use crate::templates::components::notice_banner;
use maud::{html, Markup, DOCTYPE};

/// Page chrome shared by every page: head, header with navigation, notice slot.
pub fn desktop_layout(
    title: &str,
    auth: &AuthContext,
    notice: Option<&Notice>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | EstateMate" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" {
                        span class="logo-strong" { "Estate" } "Mate"
                    }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/properties" { "Properties" } }
                            li { a href="/localities" { "Localities" } }
                            li { a href="/wishlist" { "Wishlist" } }
                        }
                    }
                    div class="account" {
                        @match auth.display_name() {
                            Some(name) => {
                                span class="greeting" { "Hi, " (name) }
                                form method="post" action="/logout" class="inline" {
                                    button type="submit" class="btn btn-ghost" { "Logout" }
                                }
                            }
                            None => {
                                a href="/login" class="btn btn-primary" { "Login" }
                            }
                        }
                    }
                }
                @if let Some(notice) = notice {
                    (notice_banner(notice))
                }
                (content)
                footer class="site-footer" {
                    p { "EstateMate · Hubli" }
                }
            }
        }
    }
}
