//! Mini Evict - Bounded concurrent key-value stores
//!
//! Provides a TTL cache with background sweeping, a fixed-capacity LRU cache
//! and a sliding-window rate limiter, plus a small HTTP server exposing them.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{LruCache, SyncLruCache, TtlCache};
pub use config::Config;
pub use error::{EvictError, Result};
pub use limiter::SlidingWindowRateLimiter;
