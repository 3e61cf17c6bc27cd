// src/wishlist/local.rs
use chrono::Utc;

use crate::db::kv::{get_value, put_value};
use crate::db::Database;
use crate::errors::StorageError;
use crate::wishlist::storage::WishlistStorage;

/// Server-side key/value backend: one `kv_store` row per owner.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    db: Database,
    key: String,
}

impl LocalStorage {
    pub fn for_owner(db: Database, owner: &str) -> Self {
        Self {
            db,
            key: format!("wishlist:{owner}"),
        }
    }

    #[cfg(test)]
    fn key(&self) -> &str {
        &self.key
    }
}

impl WishlistStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        match self.db.with_conn(|conn| get_value(conn, &self.key)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "wishlist load failed");
                None
            }
        }
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        let now = Utc::now().timestamp();
        self.db
            .with_conn(|conn| put_value(conn, &self.key, raw, now))?;
        Ok(())
    }
}
