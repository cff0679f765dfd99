//! Cache Module
//!
//! Provides in-memory key-value caching with byte-accounted LRU eviction.

mod entry;
mod list;
mod stats;
mod store;


// Re-export public types
pub use entry::{ByteSized, Entry};
pub use list::AccessList;
pub use stats::CacheStats;
pub use store::{EvictCallback, LruCache};
