use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app, request};
use crate::wishlist::WishlistBackend;
use http::Method;

#[test]
fn home_page_shows_every_featured_property() {
    let app = make_app("home_all", WishlistBackend::Cookie);

    let resp = get(&app, "/", &[]);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Featured Properties"));
    for id in 1..=4 {
        assert!(body.contains(&format!(r#"id="property-{id}""#)), "missing property {id}");
    }
    assert!(body.contains("Login"));
}

#[test]
fn properties_page_lists_the_catalog() {
    let app = make_app("properties_page", WishlistBackend::Cookie);

    let body = body_string(get(&app, "/properties", &[]));
    assert!(body.contains("Modern Minimalist Villa"));
    assert!(body.contains("Panoramic Mountain Retreat"));
    assert!(body.contains("₹55,000/mo"));
}

#[test]
fn localities_page_links_back_to_search() {
    let app = make_app("localities_page", WishlistBackend::Cookie);

    let body = body_string(get(&app, "/localities", &[]));
    assert!(body.contains("Vidyanagar"));
    assert!(body.contains("Gokul Road"));
    assert!(body.contains("location=Unkal"));
}

#[test]
fn stylesheet_is_served() {
    let app = make_app("stylesheet", WishlistBackend::Cookie);

    let resp = get(&app, "/static/main.css", &[]);
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"));
    assert!(body_string(resp).contains(".property-grid"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = make_app("unknown_route", WishlistBackend::Cookie);

    let result = handle(request(Method::GET, "/nope", &[], None), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));

    // Right path, wrong method.
    let result = handle(request(Method::GET, "/wishlist/toggle", &[], None), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
