// src/wishlist/storage.rs
use cookie::Cookie;

use crate::errors::StorageError;

/// Where a wishlist blob lives between requests.
///
/// Backends only move opaque strings; the store owns the JSON shape.
pub trait WishlistStorage {
    /// The last saved blob, or `None` when nothing readable is stored.
    fn load(&self) -> Option<String>;

    /// Replace the stored blob.
    fn save(&mut self, raw: &str) -> Result<(), StorageError>;

    /// A cookie the response has to carry for the last save to stick.
    fn set_cookie(&self) -> Option<Cookie<'static>> {
        None
    }
}

impl<T: WishlistStorage + ?Sized> WishlistStorage for Box<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        (**self).save(raw)
    }

    fn set_cookie(&self) -> Option<Cookie<'static>> {
        (**self).set_cookie()
    }
}
