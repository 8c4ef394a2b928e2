//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod store;
mod ttl;


// Re-export public types
pub use entry::TtlEntry;
pub use lru::{LruCache, SyncLruCache};
pub use store::TtlStore;
pub use ttl::TtlCache;
