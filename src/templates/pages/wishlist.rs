use crate::auth::AuthContext;
use crate::domain::Property;
use crate::notices::Notice;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn wishlist_page(auth: &AuthContext, notice: Option<&Notice>, entries: &[Property]) -> Markup {
    desktop_layout(
        "My Wishlist",
        auth,
        notice,
        html! {
            main class="container" {
                h1 { "My Wishlist" }
                @if !auth.is_authenticated() {
                    p class="lead" {
                        a href="/login" { "Log in" } " to save properties you like."
                    }
                }
                @if entries.is_empty() {
                    div class="empty-state" {
                        h3 { "Your wishlist is empty" }
                        p { "Tap the heart on any property to keep it here." }
                        a href="/" class="btn btn-primary" { "Browse properties" }
                    }
                } @else {
                    p { (entries.len()) " saved" }
                    ul class="wishlist" {
                        @for property in entries {
                            li class="wishlist-item" {
                                img src=(property.image) alt=(property.title) loading="lazy";
                                div {
                                    h3 { (property.title) }
                                    p class="address" { (property.address) }
                                    p class="price" { (property.price) }
                                }
                                form method="post" action="/wishlist/remove" {
                                    input type="hidden" name="property_id" value=(property.id);
                                    button type="submit" class="btn btn-ghost" { "Remove" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
