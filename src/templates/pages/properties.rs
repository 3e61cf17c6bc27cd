use std::collections::HashSet;

use crate::auth::AuthContext;
use crate::domain::Property;
use crate::notices::Notice;
use crate::templates::desktop_layout;
use crate::templates::pages::home::property_grid;
use maud::{html, Markup};

pub fn properties_page(
    auth: &AuthContext,
    notice: Option<&Notice>,
    properties: &[Property],
    saved: &HashSet<i64>,
) -> Markup {
    desktop_layout(
        "All Properties",
        auth,
        notice,
        html! {
            main class="container" {
                h1 { "All Properties" }
                p class="lead" { (properties.len()) " listings across Hubli" }
                (property_grid(properties, saved, "/properties"))
            }
        },
    )
}
