use crate::catalog::{HUBLI_LOCALITIES, PRICE_BUCKETS, PROPERTY_CATEGORIES};
use maud::{html, Markup};

/// Current selection echoed back into the search panel.
#[derive(Debug, Clone, Default)]
pub struct SearchPanelVm {
    pub category: String,
    pub location: String,
    pub price_range: String,
    /// `Some(n)` once a search ran: n results.
    pub result_count: Option<usize>,
}

pub fn search_panel(vm: &SearchPanelVm) -> Markup {
    html! {
        section class="search-panel" {
            form method="get" action="/" {
                div class="chips" {
                    @for category in PROPERTY_CATEGORIES {
                        label class=(if vm.category == *category { "chip chip-active" } else { "chip" }) {
                            input
                                type="radio"
                                name="category"
                                value=(category)
                                checked[vm.category == *category];
                            (category)
                        }
                    }
                }
                div class="search-fields" {
                    label for="location" class="sr-only" { "Location" }
                    select name="location" id="location" {
                        option value="" selected[vm.location.is_empty()] { "Any Location" }
                        @for location in HUBLI_LOCALITIES {
                            option value=(location) selected[vm.location == *location] { (location) }
                        }
                    }
                    label for="price" class="sr-only" { "Price range" }
                    select name="price" id="price" {
                        option value="" selected[vm.price_range.is_empty()] { "Any Price" }
                        @for range in PRICE_BUCKETS {
                            option value=(range) selected[vm.price_range == *range] { (range) }
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Search" }
                }
                @if let Some(count) = vm.result_count {
                    div class="search-summary" {
                        p {
                            @if count == 0 {
                                "No properties match your search criteria."
                            } @else {
                                "Showing " (count) " properties"
                            }
                        }
                        a href="/?reset=1" class="btn btn-ghost" { "Reset Filters" }
                    }
                }
            }
        }
    }
}
