use crate::auth::AuthContext;
use crate::notices::Notice;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(auth: &AuthContext, notice: Option<&Notice>) -> Markup {
    desktop_layout(
        "Sign in",
        auth,
        notice,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                @if let Some(name) = auth.display_name() {
                    p class="lead" { "You are signed in as " strong { (name) } "." }
                } @else {
                    p class="lead" { "Pick a display name to save properties to your wishlist." }
                    form method="post" action="/login" class="login-form" {
                        label for="name" { "Display name" }
                        input type="text" id="name" name="name" maxlength="64" autocomplete="nickname" required;
                        button type="submit" class="btn btn-primary" { "Sign in" }
                    }
                }
            }
        },
    )
}
