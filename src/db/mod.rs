pub mod connection;
pub mod kv;
pub mod users;

pub use connection::{init_db, Database};
