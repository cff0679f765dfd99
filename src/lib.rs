//! Bytecache - A size-bounded in-memory LRU cache
//!
//! Provides a byte-accounted key-value store with least-recently-used
//! eviction and an optional eviction callback. Single-threaded by design;
//! callers needing concurrent access wrap the cache in their own lock.

pub mod cache;

pub use cache::{ByteSized, CacheStats, EvictCallback, LruCache};
