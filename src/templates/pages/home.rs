// templates/pages/home.rs

use std::collections::HashSet;

use crate::auth::AuthContext;
use crate::domain::Property;
use crate::notices::Notice;
use crate::templates::{
    components::{property_card, search_panel, SearchPanelVm},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub auth: &'a AuthContext,
    pub notice: Option<Notice>,
    pub panel: SearchPanelVm,
    pub properties: &'a [Property],
    pub filtered: bool,
    pub saved: &'a HashSet<i64>,
    /// Where wishlist toggles should land afterwards (this page, same query).
    pub return_to: String,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        vm.auth,
        vm.notice.as_ref(),
        html! {
            main class="container" {
                section class="hero" {
                    span class="badge" { "Featured Properties" }
                    h1 { "Discover Our Premium Selection" }
                    p class="lead" {
                        "Explore our handpicked collection of exclusive properties, designed to meet your highest expectations and lifestyle needs."
                    }
                    div class="hero-links" {
                        a href="/properties" class="btn btn-ghost" { "View All Properties" }
                        a href="/wishlist" class="btn btn-primary" { "My Wishlist" }
                    }
                }

                (search_panel(&vm.panel))

                @if vm.filtered {
                    h2 { "Search Results" }
                    @if vm.properties.is_empty() {
                        div class="empty-state" {
                            h3 { "No properties found" }
                            p { "Try adjusting your search filters to find properties." }
                            a href="/?reset=1" class="btn btn-primary" { "Clear Filters" }
                        }
                    } @else {
                        (property_grid(vm.properties, vm.saved, &vm.return_to))
                    }
                } @else {
                    (property_grid(vm.properties, vm.saved, &vm.return_to))
                }
            }
        },
    )
}

pub fn property_grid(properties: &[Property], saved: &HashSet<i64>, return_to: &str) -> Markup {
    html! {
        div class="property-grid" {
            @for property in properties {
                (property_card(property, saved.contains(&property.id), return_to))
            }
        }
    }
}
