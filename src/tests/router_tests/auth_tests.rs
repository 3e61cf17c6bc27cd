use crate::auth::SESSION_COOKIE;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, find_cookie, get, location, make_app, post, request, sign_in};
use crate::wishlist::WishlistBackend;
use http::Method;

#[test]
fn login_page_loads() {
    let app = make_app("login_page", WishlistBackend::Cookie);

    let resp = get(&app, "/login", &[]);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"name="name""#));
}

#[test]
fn login_sets_session_and_greets_by_name() {
    let app = make_app("login_greets", WishlistBackend::Cookie);

    let session = sign_in(&app, "Asha");
    assert!(session.http_only().unwrap_or(false));
    assert!(!session.value().is_empty());

    let body = body_string(get(&app, "/", &[session]));
    assert!(body.contains("Hi, Asha"));
    assert!(body.contains("Logout"));
}

#[test]
fn same_name_signs_into_same_user() {
    let app = make_app("login_same_user", WishlistBackend::Local);

    let first = sign_in(&app, "Ravi");
    post(&app, "/wishlist/toggle", &[first], "property_id=3&next=%2F");

    // A second session under the same name sees the same stored wishlist.
    let second = sign_in(&app, "Ravi");
    let body = body_string(get(&app, "/wishlist", &[second]));
    assert!(body.contains("Contemporary City Apartment"));
}

#[test]
fn blank_display_name_is_rejected() {
    let app = make_app("login_blank", WishlistBackend::Cookie);

    let req = request(Method::POST, "/login", &[], Some("name=+++"));
    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn logout_revokes_the_session() {
    let app = make_app("logout", WishlistBackend::Cookie);
    let session = sign_in(&app, "Meera");

    let resp = post(&app, "/logout", &[session.clone()], "");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=signed_out");

    let cleared = find_cookie(&resp, SESSION_COOKIE).expect("logout should clear the cookie");
    assert_eq!(cleared.value(), "");

    // The old token no longer authenticates even if the browser kept it.
    let body = body_string(get(&app, "/", &[session]));
    assert!(!body.contains("Hi, Meera"));
    assert!(body.contains("Login"));
}

#[test]
fn signed_out_notice_is_rendered() {
    let app = make_app("signed_out_notice", WishlistBackend::Cookie);

    let body = body_string(get(&app, "/?notice=signed_out", &[]));
    assert!(body.contains("Signed out"));
}

#[test]
fn bogus_session_cookie_is_anonymous() {
    let app = make_app("bogus_session", WishlistBackend::Cookie);
    let bogus = cookie::Cookie::new(SESSION_COOKIE, "not-a-real-token");

    let body = body_string(get(&app, "/", &[bogus]));
    assert!(body.contains("Login"));
    assert!(!body.contains("Hi, "));
}
