// src/requests.rs
//! Small helpers for pulling data out of an incoming request.

use crate::errors::ServerError;
use astra::Request;
use cookie::Cookie;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded query string parameters. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Read and decode an `application/x-www-form-urlencoded` body.
pub fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}

/// Value of the named cookie, looking through every `Cookie` header.
pub fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Whether the request reached us over TLS, directly or through a proxy.
pub fn is_secure(req: &Request) -> bool {
    if req.uri().scheme_str() == Some("https") {
        return true;
    }

    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}
