use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(css.to_string()))
        .map_err(|_| ServerError::InternalError)
}
