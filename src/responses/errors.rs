use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match &err {
        ServerError::DbError(msg) => tracing::error!(error = %msg, "database failure"),
        ServerError::InternalError => tracing::error!("internal error"),
        other => tracing::debug!(error = %other, "request rejected"),
    }

    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        // Details stay in the log.
        ServerError::DbError(_) => html_error_response(500, "Something went wrong on our side."),
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let body = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}
