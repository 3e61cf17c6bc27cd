pub mod cookie_store;
pub mod local;
pub mod storage;
pub mod store;

use astra::Request;
use std::str::FromStr;

use crate::auth::AuthContext;
use crate::db::Database;

pub use cookie_store::CookieStorage;
pub use local::LocalStorage;
pub use storage::WishlistStorage;
pub use store::WishlistStore;

pub type DynStorage = Box<dyn WishlistStorage>;

/// Which backend holds wishlists. Picked once, from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistBackend {
    /// `kv_store` rows in the site database, one per signed-in user.
    Local,
    /// A `wishlist` cookie in the visitor's browser.
    Cookie,
}

impl FromStr for WishlistBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(WishlistBackend::Local),
            "cookie" => Ok(WishlistBackend::Cookie),
            other => Err(format!("unknown wishlist backend `{other}` (expected local or cookie)")),
        }
    }
}

/// Build the storage for this request's wishlist.
pub fn open_storage(
    backend: WishlistBackend,
    req: &Request,
    db: &Database,
    auth: &AuthContext,
    secure: bool,
) -> DynStorage {
    match backend {
        WishlistBackend::Local => {
            let owner = auth
                .user_id()
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| "guest".to_string());
            Box::new(LocalStorage::for_owner(db.clone(), &owner))
        }
        WishlistBackend::Cookie => Box::new(CookieStorage::from_request(req, secure)),
    }
}

/// Open and hydrate the wishlist for this request.
pub fn open_store(
    backend: WishlistBackend,
    req: &Request,
    db: &Database,
    auth: &AuthContext,
    secure: bool,
) -> WishlistStore<DynStorage> {
    WishlistStore::hydrate(open_storage(backend, req, db, auth, secure))
}
