//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the arena-backed access
//! list, byte accounting against a configurable budget, and LRU eviction.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::cache::{AccessList, ByteSized, CacheStats, Entry};

// == Eviction Callback ==
/// Hook invoked synchronously with each entry removed by eviction.
///
/// Runs on the caller's stack inside `add`/`remove_oldest`; it must not
/// re-enter the cache, and a panic from it propagates to the caller.
pub type EvictCallback<V> = Box<dyn FnMut(String, V)>;

// == LRU Cache ==
/// Size-bounded key-value cache with least-recently-used eviction.
///
/// Capacity is a byte budget: every entry is charged its key length plus the
/// value's reported [`ByteSized::byte_len`]. Once the budget is exceeded,
/// entries are evicted from the least recently used end until it holds
/// again. A budget of zero disables enforcement entirely.
///
/// The cache is single-threaded; `get` mutates recency order, so concurrent
/// callers must wrap every operation in one lock.
pub struct LruCache<V> {
    /// Configured byte budget; 0 = unbounded
    max_bytes: u64,
    /// Sum of accounted sizes over all live entries
    used_bytes: u64,
    /// Recency order, front = most recently used
    list: AccessList<V>,
    /// Key to list-slot index
    index: HashMap<String, usize>,
    /// Optional eviction hook
    on_evicted: Option<EvictCallback<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("len", &self.index.len())
            .field("has_evict_callback", &self.on_evicted.is_some())
            .finish()
    }
}

impl<V: ByteSized> LruCache<V> {
    // == Constructors ==
    /// Creates a new cache with the given byte budget and no eviction hook.
    ///
    /// # Arguments
    /// * `max_bytes` - Capacity budget in bytes; 0 means unbounded
    pub fn new(max_bytes: u64) -> Self {
        Self::with_on_evicted(max_bytes, None)
    }

    /// Creates a new cache with an optional eviction callback.
    ///
    /// The callback receives every entry removed by capacity eviction or
    /// [`remove_oldest`](Self::remove_oldest), as an owned (key, value) pair,
    /// in eviction order.
    pub fn with_on_evicted(max_bytes: u64, on_evicted: Option<EvictCallback<V>>) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            list: AccessList::new(),
            index: HashMap::new(),
            on_evicted,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Looks up a value by key, promoting it to most recently used.
    ///
    /// Returns None if the key is absent; absence is a normal result, not an
    /// error.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if let Some(&idx) = self.index.get(key) {
            self.list.move_to_front(idx);
            self.stats.record_hit();
            self.list.get(idx).map(|entry| &entry.value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Add ==
    /// Inserts or updates a key-value pair.
    ///
    /// An existing key has its value replaced in place and counts as an
    /// access (promoted to most recently used); a new key is inserted at the
    /// front. Afterwards the cache evicts from the least recently used end
    /// until the byte budget holds again. The write itself is never
    /// rejected: a single entry larger than the whole budget is admitted and
    /// then evicted along with everything else, leaving the cache empty.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if let Some(&idx) = self.index.get(&key) {
            self.list.move_to_front(idx);
            if let Some(entry) = self.list.get_mut(idx) {
                let old_size = entry.accounted_size();
                entry.value = value;
                let new_size = entry.accounted_size();
                self.used_bytes = self.used_bytes - old_size + new_size;
                trace!(key = %key, old_size, new_size, "updated cache entry");
            }
        } else {
            let entry = Entry::new(key.clone(), value);
            let size = entry.accounted_size();
            let idx = self.list.push_front(entry);
            self.index.insert(key, idx);
            self.used_bytes += size;
            trace!(size, "inserted cache entry");
        }

        // Evict until the budget holds; an oversized insert or a large
        // update delta may require more than one eviction.
        while self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            self.remove_oldest();
        }
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry.
    ///
    /// Removes the tail of the access list, drops its key from the index,
    /// releases its accounted bytes, and invokes the eviction callback with
    /// the removed pair before returning. No-op on an empty cache.
    pub fn remove_oldest(&mut self) {
        if let Some(entry) = self.list.pop_back() {
            let size = entry.accounted_size();
            self.index.remove(&entry.key);
            self.used_bytes -= size;
            self.stats.record_eviction();
            debug!(key = %entry.key, size, "evicted least recently used entry");

            if let Some(callback) = self.on_evicted.as_mut() {
                callback(entry.key, entry.value);
            }
        }
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks for a key without promoting it.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Peek Oldest ==
    /// Returns the current eviction candidate without promoting it.
    pub fn peek_oldest(&self) -> Option<(&str, &V)> {
        self.list
            .back()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    // == Usage ==
    /// Returns the bytes currently accounted against the budget.
    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    /// Returns the configured byte budget (0 = unbounded).
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.index.len(), self.used_bytes);
        stats
    }
}
