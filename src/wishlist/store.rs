// src/wishlist/store.rs
use std::collections::HashSet;

use crate::domain::Property;
use crate::wishlist::storage::WishlistStorage;

/// The visitor's favorited properties, keyed by id.
///
/// Built by [`WishlistStore::hydrate`] from whatever the backend holds and
/// written back in full after every `add` / `remove`. Storage failures are
/// logged and swallowed: the in-memory set stays authoritative.
pub struct WishlistStore<S: WishlistStorage> {
    storage: S,
    entries: Vec<Property>,
    ids: HashSet<i64>,
}

impl<S: WishlistStorage> WishlistStore<S> {
    /// Read the persisted blob. Absent or unreadable data gives an empty
    /// wishlist; duplicate ids keep their first occurrence.
    pub fn hydrate(storage: S) -> Self {
        let stored: Vec<Property> = match storage.load() {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unreadable wishlist");
                Vec::new()
            }),
        };

        let mut store = Self {
            storage,
            entries: Vec::with_capacity(stored.len()),
            ids: HashSet::with_capacity(stored.len()),
        };
        for property in stored {
            store.insert(property);
        }

        tracing::debug!(entries = store.entries.len(), "wishlist hydrated");
        store
    }

    /// Insert unless the id is already present. Returns whether it was inserted.
    pub fn add(&mut self, property: Property) -> bool {
        let inserted = self.insert(property);
        self.persist();
        inserted
    }

    /// Drop the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let removed = self.ids.remove(&id);
        if removed {
            self.entries.retain(|p| p.id != id);
        }
        self.persist();
        removed
    }

    /// Add when absent, remove when present. Returns whether it is now saved.
    pub fn toggle(&mut self, property: Property) -> bool {
        if self.contains(property.id) {
            self.remove(property.id);
            false
        } else {
            self.add(property);
            true
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn insert(&mut self, property: Property) -> bool {
        if !self.ids.insert(property.id) {
            return false;
        }
        self.entries.push(property);
        true
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize wishlist");
                return;
            }
        };

        if let Err(e) = self.storage.save(&raw) {
            tracing::warn!(error = %e, entries = self.entries.len(), "wishlist not persisted");
        }
    }
}
