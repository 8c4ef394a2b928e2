//! TTL Store Module
//!
//! Unsynchronized key-value map with per-entry expiry. [`TtlCache`] wraps it
//! in a lock and attaches a background sweep.
//!
//! [`TtlCache`]: crate::cache::TtlCache

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::cache::TtlEntry;

// == TTL Store ==
/// Key-value storage where each entry carries its own expiry.
#[derive(Debug)]
pub struct TtlStore<K, V> {
    entries: HashMap<K, TtlEntry<V>>,
}

impl<K, V> Default for TtlStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> TtlStore<K, V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, replacing any previous entry and its expiry.
    ///
    /// A zero `ttl` stores the value without expiry.
    pub fn set_at(&mut self, key: K, value: V, ttl: Duration, now: Instant) {
        self.entries.insert(key, TtlEntry::new(value, ttl, now));
    }

    // == Get ==
    /// Looks up a live entry.
    ///
    /// An entry found expired at `now` is removed before returning `None`.
    pub fn get_at<Q>(&mut self, key: &Q, now: Instant) -> Option<&TtlEntry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let expired = self.entries.get(key)?.is_expired_at(now);
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key)
    }

    // == Delete ==
    /// Removes an entry. Returns true if one was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).is_some()
    }

    // == Purge Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    /// Number of stored entries, including expired ones not yet purged.
    /// Returns the number of stored entries, live or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
