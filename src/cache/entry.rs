//! Cache Entry Module
//!
//! Defines the structure for individual TTL cache entries.

use std::time::{Duration, Instant};

// == TTL Entry ==
/// A stored value with an optional absolute expiry instant.
#[derive(Debug, Clone)]
pub struct TtlEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiry instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> TtlEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// A zero `ttl` marks the entry as never expiring. A `ttl` too large to
    /// be represented as an instant is treated the same way.
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self { value, expires_at }
    }

    /// Returns true if the entry has no expiry.
    pub fn never_expires(&self) -> bool {
        self.expires_at.is_none()
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so
    /// it is live strictly before its expiry instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime at `now`, or None if it never expires.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry is still live
    /// - `None` if the entry never expires
    pub fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_zero_ttl_never_expires() {
        let now = Instant::now();
        let entry = TtlEntry::new("value", Duration::ZERO, now);

        assert!(entry.never_expires());
        assert!(!entry.is_expired_at(now + Duration::from_secs(86_400 * 365)));
        assert!(entry.ttl_remaining_at(now).is_none());
    }

    #[test]
    fn test_entry_with_ttl() {
        let now = Instant::now();
        let entry = TtlEntry::new("value", Duration::from_secs(60), now);

        assert!(!entry.never_expires());
        assert!(!entry.is_expired_at(now));
        assert_eq!(entry.ttl_remaining_at(now), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let ttl = Duration::from_millis(100);
        let entry = TtlEntry::new("value", ttl, now);

        assert!(!entry.is_expired_at(now + ttl - Duration::from_nanos(1)));
        assert!(entry.is_expired_at(now + ttl), "Entry should be expired at boundary");
    }

    #[test]
    fn test_ttl_remaining_after_expiry_is_zero() {
        let now = Instant::now();
        let entry = TtlEntry::new("value", Duration::from_millis(10), now);

        assert_eq!(
            entry.ttl_remaining_at(now + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_unrepresentable_ttl_never_expires() {
        let entry = TtlEntry::new("value", Duration::MAX, Instant::now());
        assert!(entry.never_expires());
    }
}
