//! Window Log Module
//!
//! Unsynchronized per-key request log backing the sliding-window limiter.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::error::{EvictError, Result};

// == Window Log ==
/// Admitted request instants per key, oldest first.
///
/// An instant counts toward a key's budget only while it is strictly after
/// `now - window`; an instant exactly `window` old no longer counts.
#[derive(Debug)]
pub struct WindowLog<K> {
    window: Duration,
    limit: usize,
    requests: HashMap<K, VecDeque<Instant>>,
}

impl<K: Eq + Hash> WindowLog<K> {
    // == Constructor ==
    /// Creates an empty log admitting `limit` requests per `window`.
    ///
    /// # Errors
    /// - `InvalidConfig` if `window` or `limit` is zero
    pub fn new(window: Duration, limit: usize) -> Result<Self> {
        if window.is_zero() {
            return Err(EvictError::InvalidConfig(
                "rate limit window must be greater than zero".to_string(),
            ));
        }
        if limit == 0 {
            return Err(EvictError::InvalidConfig(
                "rate limit must allow at least one request".to_string(),
            ));
        }

        Ok(Self {
            window,
            limit,
            requests: HashMap::new(),
        })
    }

    // == Check ==
    /// Decides whether a request for `key` at `now` is admitted.
    ///
    /// Stale instants are pruned first. A rejected request is not recorded.
    pub fn check_at<Q>(&mut self, key: &Q, now: Instant) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let Some(log) = self.requests.get_mut(key) else {
            self.requests.insert(key.to_owned(), VecDeque::from([now]));
            return true;
        };

        if let Some(cutoff) = now.checked_sub(self.window) {
            while log.front().is_some_and(|&t| t <= cutoff) {
                log.pop_front();
            }
        }

        if log.len() >= self.limit {
            return false;
        }
        log.push_back(now);
        true
    }

    /// Number of admitted requests for `key` still inside the window at `now`.
    pub fn count_at<Q>(&self, key: &Q, now: Instant) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(log) = self.requests.get(key) else {
            return 0;
        };
        match now.checked_sub(self.window) {
            Some(cutoff) => log.iter().filter(|&&t| t > cutoff).count(),
            None => log.len(),
        }
    }

    // == Purge Inactive ==
    /// Drops every key whose most recent request no longer counts at `now`.
    ///
    /// Returns the number of keys removed.
    pub fn purge_inactive_at(&mut self, now: Instant) -> usize {
        let Some(cutoff) = now.checked_sub(self.window) else {
            return 0;
        };

        let before = self.requests.len();
        self.requests
            .retain(|_, log| log.back().is_some_and(|&last| last > cutoff));
        before - self.requests.len()
    }

    /// Number of keys with retained state.
    pub fn tracked_keys(&self) -> usize {
        self.requests.len()
    }

    /// Returns the trailing window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns the per-key request budget.
    pub fn limit(&self) -> usize {
        self.limit
    }
}
