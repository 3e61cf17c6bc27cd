// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Failures of a wishlist storage backend. These never reach route handlers:
/// the wishlist store logs them and carries on with its in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage database error: {0}")]
    Db(String),
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },
}

impl From<ServerError> for StorageError {
    fn from(err: ServerError) -> Self {
        StorageError::Db(err.to_string())
    }
}
