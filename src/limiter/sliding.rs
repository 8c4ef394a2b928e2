//! Sliding Window Rate Limiter
//!
//! Thread-safe per-key limiter with a background sweep of idle keys.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::Result;
use crate::limiter::WindowLog;
use crate::tasks::{Janitor, Sweep};

impl<K> Sweep for Mutex<WindowLog<K>>
where
    K: Eq + Hash + Send + 'static,
{
    fn sweep(&self) -> usize {
        self.lock().purge_inactive_at(Instant::now())
    }
}

// == Sliding Window Rate Limiter ==
/// Admits at most `limit` requests per key within any trailing `window`.
///
/// Keys with no request inside the window are dropped by the background
/// sweep, so memory is bounded by the number of recently active keys.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter<K> {
    log: Arc<Mutex<WindowLog<K>>>,
    janitor: Janitor,
}

impl<K> SlidingWindowRateLimiter<K>
where
    K: Eq + Hash + Send + 'static,
{
    // == Constructor ==
    /// Creates a limiter and starts its sweep on the current runtime.
    ///
    /// # Errors
    /// - `InvalidConfig` if `window`, `limit` or `sweep_interval` is zero
    /// - `NoRuntime` if called outside a tokio runtime
    pub fn new(window: Duration, limit: usize, sweep_interval: Duration) -> Result<Self> {
        let log = Arc::new(Mutex::new(WindowLog::new(window, limit)?));
        let janitor = Janitor::spawn("rate limiter", &log, sweep_interval)?;
        Ok(Self { log, janitor })
    }

    // == Is Allowed ==
    /// Records and admits a request for `key`, or rejects it without
    /// recording when the key's window is full.
    pub fn is_allowed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let allowed = self.log.lock().check_at(key, Instant::now());
        if !allowed {
            debug!("rate limiter: request rejected");
        }
        allowed
    }

    /// Runs one sweep pass immediately. Returns the number of keys dropped.
    pub fn purge_inactive(&self) -> usize {
        self.log.sweep()
    }

    /// Returns the number of keys with retained request state.
    pub fn tracked_keys(&self) -> usize {
        self.log.lock().tracked_keys()
    }

    /// Returns the trailing window length.
    pub fn window(&self) -> Duration {
        self.log.lock().window()
    }

    /// Returns the per-key request budget.
    pub fn limit(&self) -> usize {
        self.log.lock().limit()
    }

    // == Shutdown ==
    /// Stops the background sweep. Admission decisions keep working.
    pub fn shutdown(&self) {
        self.janitor.stop();
    }

    /// Returns true while the background sweep is running.
    pub fn is_sweeping(&self) -> bool {
        !self.janitor.is_finished()
    }
}
