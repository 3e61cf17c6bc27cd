pub mod context;
pub mod sessions;
pub mod token;

pub use context::{AuthContext, SESSION_COOKIE};
