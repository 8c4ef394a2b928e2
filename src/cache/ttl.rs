//! TTL Cache Module
//!
//! Thread-safe TTL store with lazy eviction on read and a background sweep.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::cache::TtlStore;
use crate::error::Result;
use crate::tasks::{Janitor, Sweep};

impl<K, V> Sweep for Mutex<TtlStore<K, V>>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    fn sweep(&self) -> usize {
        self.lock().purge_expired_at(Instant::now())
    }
}

// == TTL Cache ==
/// Concurrent key-value cache where every entry has its own lifetime.
///
/// Every operation takes the single exclusive lock, including `get`, which
/// may evict. The sweep task stops on [`TtlCache::shutdown`] or on drop.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    store: Arc<Mutex<TtlStore<K, V>>>,
    janitor: Janitor,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Clone + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its sweep on the current runtime.
    ///
    /// # Errors
    /// - `InvalidConfig` if `sweep_interval` is zero
    /// - `NoRuntime` if called outside a tokio runtime
    pub fn new(sweep_interval: Duration) -> Result<Self> {
        let store = Arc::new(Mutex::new(TtlStore::new()));
        let janitor = Janitor::spawn("ttl cache", &store, sweep_interval)?;
        Ok(Self { store, janitor })
    }

    // == Set ==
    /// Inserts or overwrites a value. A zero `ttl` never expires.
    pub fn set(&self, key: K, value: V, ttl: Duration) {
        self.store.lock().set_at(key, value, ttl, Instant::now());
    }

    // == Get ==
    /// Returns a clone of the live value, evicting it first if expired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store
            .lock()
            .get_at(key, Instant::now())
            .map(|entry| entry.value.clone())
    }

    /// Like [`TtlCache::get`], also returning the remaining lifetime.
    ///
    /// The lifetime is `None` for entries that never expire.
    pub fn get_with_ttl<Q>(&self, key: &Q) -> Option<(V, Option<Duration>)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        self.store
            .lock()
            .get_at(key, now)
            .map(|entry| (entry.value.clone(), entry.ttl_remaining_at(now)))
    }

    // == Delete ==
    /// Removes an entry. Returns true if one was present.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.lock().delete(key)
    }

    /// Runs one sweep pass immediately. Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        self.store.sweep()
    }

    /// Returns the number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    // == Shutdown ==
    /// Stops the background sweep. Foreground operations keep working.
    pub fn shutdown(&self) {
        self.janitor.stop();
    }

    /// Returns true while the background sweep is running.
    pub fn is_sweeping(&self) -> bool {
        !self.janitor.is_finished()
    }
}
