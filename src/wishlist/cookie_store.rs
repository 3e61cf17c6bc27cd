// src/wishlist/cookie_store.rs
use astra::Request;
use base64::Engine;
use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::errors::StorageError;
use crate::requests::cookie_value;
use crate::wishlist::storage::WishlistStorage;

pub const WISHLIST_COOKIE: &str = "wishlist";

/// Browsers cap a single cookie (name, value and attributes) around 4 KiB.
pub const MAX_COOKIE_BYTES: usize = 4096;

/// Days a wishlist cookie survives after its last write.
pub const COOKIE_TTL_DAYS: i64 = 30;

/// Browser-side backend: the blob rides in a `wishlist` cookie,
/// base64url-encoded so JSON punctuation never touches the cookie grammar.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    incoming: Option<String>,
    pending: Option<Cookie<'static>>,
    secure: bool,
}

impl CookieStorage {
    /// `secure` marks written cookies `Secure`; pass true when the request
    /// came in over TLS.
    pub fn new(incoming: Option<String>, secure: bool) -> Self {
        Self {
            incoming,
            pending: None,
            secure,
        }
    }

    pub fn from_request(req: &Request, secure: bool) -> Self {
        Self::new(cookie_value(req, WISHLIST_COOKIE), secure)
    }

    fn build_cookie(&self, encoded: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(WISHLIST_COOKIE, encoded);
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(self.secure);
        cookie.set_path("/");
        cookie.set_max_age(Duration::days(COOKIE_TTL_DAYS));
        cookie.set_expires(OffsetDateTime::now_utc() + Duration::days(COOKIE_TTL_DAYS));
        cookie
    }
}

impl WishlistStorage for CookieStorage {
    fn load(&self) -> Option<String> {
        // A write earlier in this request wins over what the browser sent.
        let encoded = match &self.pending {
            Some(cookie) => cookie.value().to_string(),
            None => self.incoming.clone()?,
        };

        let bytes = match base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(encoded.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "wishlist cookie is not valid base64");
                return None;
            }
        };

        match String::from_utf8(bytes) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::warn!(error = %e, "wishlist cookie is not valid utf-8");
                None
            }
        }
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw.as_bytes());
        let cookie = self.build_cookie(encoded);

        let size = cookie.to_string().len();
        if size > MAX_COOKIE_BYTES {
            return Err(StorageError::TooLarge {
                size,
                limit: MAX_COOKIE_BYTES,
            });
        }

        self.pending = Some(cookie);
        Ok(())
    }

    fn set_cookie(&self) -> Option<Cookie<'static>> {
        self.pending.clone()
    }
}
