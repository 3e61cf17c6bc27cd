use crate::db::connection::{init_db, Database};
use crate::router::{handle, AppState};
use crate::wishlist::WishlistBackend;
use astra::{Body, Response};
use cookie::Cookie;
use http::{Method, Request};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh database file per call so parallel tests never share rows.
pub fn make_db(name: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let path = std::env::temp_dir().join(format!("estatemate_{name}_{nanos}.sqlite3"));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn make_app(name: &str, backend: WishlistBackend) -> AppState {
    AppState {
        db: make_db(name),
        wishlist_backend: backend,
        secure_cookies: false,
    }
}

/// Build a request carrying `cookies` as a single `Cookie` header.
pub fn request(
    method: Method,
    uri: &str,
    cookies: &[Cookie<'static>],
    form: Option<&str>,
) -> astra::Request {
    let mut builder = Request::builder().method(method).uri(uri);

    if !cookies.is_empty() {
        let header = cookies
            .iter()
            .map(|c| format!("{}={}", c.name(), c.value()))
            .collect::<Vec<_>>()
            .join("; ");
        builder = builder.header("Cookie", header);
    }

    let body = match form {
        Some(form) => {
            builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

pub fn get(app: &AppState, uri: &str, cookies: &[Cookie<'static>]) -> Response {
    handle(request(Method::GET, uri, cookies, None), app).expect("GET failed")
}

pub fn post(app: &AppState, uri: &str, cookies: &[Cookie<'static>], form: &str) -> Response {
    handle(request(Method::POST, uri, cookies, Some(form)), app).expect("POST failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn set_cookies(resp: &Response) -> Vec<Cookie<'static>> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| Cookie::parse(v.to_string()).ok())
        .collect()
}

pub fn find_cookie(resp: &Response, name: &str) -> Option<Cookie<'static>> {
    set_cookies(resp).into_iter().find(|c| c.name() == name)
}

/// Sign in under `name` and return the session cookie.
pub fn sign_in(app: &AppState, name: &str) -> Cookie<'static> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .finish();
    let resp = post(app, "/login", &[], &form);
    assert_eq!(resp.status(), 302);

    find_cookie(&resp, crate::auth::SESSION_COOKIE).expect("no session cookie")
}

pub fn search_uri(location: &str, price: &str) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("location", location)
        .append_pair("price", price)
        .finish();
    format!("/?{qs}")
}
