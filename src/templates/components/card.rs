use crate::domain::{ListingKind, Property};
use maud::{html, Markup};

/// One property tile. `saved` fills the heart; the heart posts a toggle
/// and comes back to `return_to`.
pub fn property_card(property: &Property, saved: bool, return_to: &str) -> Markup {
    let kind_class = match property.kind {
        ListingKind::ForSale => "badge badge-sale",
        ListingKind::ForRent => "badge badge-rent",
    };

    let heart_class = if saved { "heart heart-saved" } else { "heart" };

    html! {
        article class="property-card" id=(format!("property-{}", property.id)) {
            div class="property-image" {
                img src=(property.image) alt=(property.title) loading="lazy";
                div class="badges" {
                    span class=(kind_class) { (property.kind.label()) }
                    @if property.is_new {
                        span class="badge badge-new" { "New" }
                    }
                }
                form method="post" action="/wishlist/toggle" class="heart-form" {
                    input type="hidden" name="property_id" value=(property.id);
                    input type="hidden" name="next" value=(return_to);
                    button
                        type="submit"
                        class=(heart_class)
                        aria-pressed=(if saved { "true" } else { "false" })
                        title=(if saved { "Remove from wishlist" } else { "Add to wishlist" })
                    {
                        @if saved { "♥" } @else { "♡" }
                    }
                }
            }
            div class="property-body" {
                h3 { (property.title) }
                p class="address" { (property.address) }
                p class="price" { (property.price) }
                ul class="facts" {
                    li { (property.beds) " Beds" }
                    li { (property.baths) " Baths" }
                    li { (property.sqft) " sqft" }
                }
            }
        }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
