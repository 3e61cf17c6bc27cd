// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use cookie::Cookie;

pub fn redirect(location: &str) -> ResultResp {
    redirect_with_cookies(location, &[])
}

/// 302 to `location`, carrying any cookies the handler produced.
pub fn redirect_with_cookies(location: &str, cookies: &[Cookie<'_>]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(302)
        .header("Location", location);

    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.to_string());
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Only same-site paths are allowed as redirect targets. They must also be
/// valid as a `Location` header value.
pub fn safe_return_path(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}
