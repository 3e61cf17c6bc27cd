use crate::router::handle;
use crate::tests::utils::{
    body_string, find_cookie, get, location, make_app, post, request, search_uri, sign_in,
};
use http::header::HeaderValue;
use http::Method;
use crate::wishlist::cookie_store::WISHLIST_COOKIE;
use crate::wishlist::WishlistBackend;

#[test]
fn anonymous_toggle_redirects_to_login() {
    let app = make_app("wishlist_anonymous", WishlistBackend::Cookie);

    let resp = post(&app, "/wishlist/toggle", &[], "property_id=1&next=%2F");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login?notice=auth");
    assert!(find_cookie(&resp, WISHLIST_COOKIE).is_none());

    let body = body_string(get(&app, "/login?notice=auth", &[]));
    assert!(body.contains("Authentication required"));
}

#[test]
fn cookie_backend_round_trip() {
    let app = make_app("wishlist_cookie_round_trip", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let resp = post(&app, "/wishlist/toggle", &[session.clone()], "property_id=1&next=%2F");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=added&id=1");

    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).expect("wishlist cookie");
    assert!(wishlist.http_only().unwrap_or(false));
    assert_eq!(wishlist.same_site(), Some(cookie::SameSite::Strict));

    let body = body_string(get(&app, "/wishlist", &[session.clone(), wishlist.clone()]));
    assert!(body.contains("Modern Minimalist Villa"));
    assert!(body.contains("1 saved"));

    // home marks the heart as saved and shows the notice
    let body = body_string(get(&app, "/?notice=added&id=1", &[session, wishlist]));
    assert!(body.contains("Added to wishlist"));
    assert!(body.contains("heart heart-saved"));
}

#[test]
fn toggle_twice_removes() {
    let app = make_app("wishlist_toggle_twice", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let resp = post(&app, "/wishlist/toggle", &[session.clone()], "property_id=2&next=%2F");
    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).unwrap();

    let resp = post(
        &app,
        "/wishlist/toggle",
        &[session.clone(), wishlist],
        "property_id=2&next=%2F",
    );
    assert_eq!(location(&resp), "/?notice=removed&id=2");
    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).unwrap();

    let body = body_string(get(&app, "/wishlist", &[session, wishlist]));
    assert!(body.contains("Your wishlist is empty"));
}

#[test]
fn toggle_returns_to_the_search_it_came_from() {
    let app = make_app("wishlist_next", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let next = search_uri("Unkal", "₹2Cr - ₹5Cr");
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("property_id", "4")
        .append_pair("next", &next)
        .finish();

    let resp = post(&app, "/wishlist/toggle", &[session], &form);
    assert_eq!(location(&resp), format!("{next}&notice=added&id=4"));
}

#[test]
fn offsite_next_falls_back_to_home() {
    let app = make_app("wishlist_offsite_next", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let resp = post(
        &app,
        "/wishlist/toggle",
        &[session],
        "property_id=4&next=https%3A%2F%2Fevil.example",
    );
    assert_eq!(location(&resp), "/?notice=added&id=4");
}

#[test]
fn unknown_property_is_a_bad_request() {
    let app = make_app("wishlist_unknown", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let req = request(
        Method::POST,
        "/wishlist/toggle",
        &[session],
        Some("property_id=99"),
    );
    let result = handle(req, &app);
    assert!(matches!(result, Err(crate::errors::ServerError::BadRequest(_))));
}

#[test]
fn local_backend_persists_without_cookies() {
    let app = make_app("wishlist_local", WishlistBackend::Local);
    let session = sign_in(&app, "Kiran");

    let resp = post(&app, "/wishlist/toggle", &[session.clone()], "property_id=4&next=%2F");
    assert!(find_cookie(&resp, WISHLIST_COOKIE).is_none());
    post(&app, "/wishlist/toggle", &[session.clone()], "property_id=2&next=%2F");

    let body = body_string(get(&app, "/wishlist", &[session.clone()]));
    assert!(body.contains("Panoramic Mountain Retreat"));
    assert!(body.contains("Luxury Beachfront Condo"));
    assert!(body.contains("2 saved"));

    // someone else has their own list
    let other = sign_in(&app, "Farah");
    let body = body_string(get(&app, "/wishlist", &[other]));
    assert!(body.contains("Your wishlist is empty"));
}

#[test]
fn remove_from_wishlist_page() {
    let app = make_app("wishlist_remove", WishlistBackend::Local);
    let session = sign_in(&app, "Kiran");

    post(&app, "/wishlist/toggle", &[session.clone()], "property_id=1&next=%2F");
    post(&app, "/wishlist/toggle", &[session.clone()], "property_id=3&next=%2F");

    let resp = post(&app, "/wishlist/remove", &[session.clone()], "property_id=1");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/wishlist?notice=removed&id=1");

    let body = body_string(get(&app, "/wishlist?notice=removed&id=1", &[session.clone()]));
    assert!(body.contains("Removed from wishlist"));
    assert!(body.contains("Contemporary City Apartment"));
    assert!(body.contains("1 saved"));

    // removing something that is not there just goes back
    let resp = post(&app, "/wishlist/remove", &[session], "property_id=1");
    assert_eq!(location(&resp), "/wishlist");
}

#[test]
fn corrupt_cookie_reads_as_empty() {
    let app = make_app("wishlist_corrupt_cookie", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");
    let junk = cookie::Cookie::new(WISHLIST_COOKIE, "%%%not-base64%%%");

    let body = body_string(get(&app, "/wishlist", &[session, junk]));
    assert!(body.contains("Your wishlist is empty"));
}

#[test]
fn control_characters_in_next_fall_back_to_home() {
    let app = make_app("wishlist_next_crlf", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let resp = post(
        &app,
        "/wishlist/toggle",
        &[session],
        "property_id=1&next=%2Fx%0D%0ASet-Cookie%3A%20a%3Db",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=added&id=1");

    // the toggle still reaches the browser
    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).expect("wishlist cookie");
    assert!(!wishlist.value().is_empty());
    assert!(find_cookie(&resp, "a").is_none());
}

#[test]
fn forwarded_https_marks_wishlist_cookie_secure() {
    let app = make_app("wishlist_forwarded_https", WishlistBackend::Cookie);
    let session = sign_in(&app, "Asha");

    let mut req = request(
        Method::POST,
        "/wishlist/toggle",
        &[session.clone()],
        Some("property_id=3&next=%2F"),
    );
    req.headers_mut()
        .insert("X-Forwarded-Proto", HeaderValue::from_static("https"));
    let resp = handle(req, &app).expect("toggle failed");

    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).expect("wishlist cookie");
    assert_eq!(wishlist.secure(), Some(true));

    // plain http leaves it off
    let resp = post(&app, "/wishlist/toggle", &[session], "property_id=4&next=%2F");
    let wishlist = find_cookie(&resp, WISHLIST_COOKIE).expect("wishlist cookie");
    assert_ne!(wishlist.secure(), Some(true));
}

#[test]
fn anonymous_remove_redirects_to_login() {
    let app = make_app("wishlist_remove_anonymous", WishlistBackend::Local);

    let resp = post(&app, "/wishlist/remove", &[], "property_id=1");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login?notice=auth");
}
