use crate::auth::AuthContext;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

/// `(locality, number of listings)` pairs in display order.
pub fn localities_page(auth: &AuthContext, localities: &[(&str, usize)]) -> Markup {
    desktop_layout(
        "Localities",
        auth,
        None,
        html! {
            main class="container" {
                h1 { "Localities" }
                div class="locality-grid" {
                    @for (name, count) in localities {
                        @let query: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
                        (card(name, html! {
                            p {
                                (count) @if *count == 1 { " property" } @else { " properties" }
                            }
                            a href=(format!("/?location={query}")) {
                                "Browse " (name)
                            }
                        }))
                    }
                }
            }
        },
    )
}
