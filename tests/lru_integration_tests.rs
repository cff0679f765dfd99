//! Integration tests for the LRU cache
//!
//! Exercises the public API end to end: lookup semantics, byte-budget
//! eviction, callback ordering, and custom payload types.

use std::cell::RefCell;
use std::rc::Rc;

use bytecache::{ByteSized, LruCache};

// == Lookup Semantics ==
#[test]
fn test_get_hit_and_miss() {
    let mut cache = LruCache::new(0);

    cache.add("name", "sean".to_string());

    assert_eq!(cache.get("name"), Some(&"sean".to_string()));
    assert_eq!(cache.get("key"), None);
}

// == Byte-Budget Eviction ==
#[test]
fn test_remove_oldest_on_overflow() {
    // name1/name2/name3 each account 9 bytes; an 18-byte budget holds two
    let mut cache = LruCache::new(18);

    cache.add("name1", "sean".to_string());
    cache.add("name2", "emma".to_string());
    cache.add("name3", "alex".to_string());

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("name1"), None);
    assert_eq!(cache.get("name2"), Some(&"emma".to_string()));
    assert_eq!(cache.get("name3"), Some(&"alex".to_string()));
}

// == Eviction Callback ==
#[test]
fn test_on_evicted_collects_keys_in_order() {
    let evicted = Rc::new(RefCell::new(Vec::new()));
    let collected = Rc::clone(&evicted);

    let mut cache = LruCache::with_on_evicted(
        10,
        Some(Box::new(move |key, _value: String| {
            collected.borrow_mut().push(key);
        })),
    );

    cache.add("key1", "123456".to_string());
    cache.add("k2", "v2".to_string());
    cache.add("k3", "v3".to_string());
    cache.add("k4", "v4".to_string());

    let expected = vec!["key1".to_string(), "k2".to_string()];
    assert_eq!(*evicted.borrow(), expected);
}

// == Recency Tracking Across Operations ==
#[test]
fn test_get_refreshes_recency() {
    let mut cache = LruCache::new(36);

    cache.add("name1", "sean".to_string());
    cache.add("name2", "emma".to_string());
    cache.add("name3", "alex".to_string());
    cache.add("name4", "finn".to_string());

    // Refresh the two oldest entries, leaving name3 as the victim
    cache.get("name1");
    cache.get("name2");

    cache.add("name5", "lily".to_string());

    assert!(cache.contains("name1"));
    assert!(cache.contains("name2"));
    assert!(!cache.contains("name3"));
    assert!(cache.contains("name4"));
    assert!(cache.contains("name5"));
}

// == Custom Payload Types ==
#[test]
fn test_custom_value_type() {
    #[derive(Debug, PartialEq)]
    struct Page {
        body: Vec<u8>,
    }

    impl ByteSized for Page {
        fn byte_len(&self) -> usize {
            self.body.len()
        }
    }

    // Each entry accounts 4 + 12 = 16 bytes
    let mut cache = LruCache::new(32);

    cache.add("doc1", Page { body: vec![0u8; 12] });
    cache.add("doc2", Page { body: vec![1u8; 12] });
    cache.add("doc3", Page { body: vec![2u8; 12] });

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains("doc1"));
    assert_eq!(cache.get("doc2"), Some(&Page { body: vec![1u8; 12] }));
}

// == Stats Snapshot ==
#[test]
fn test_stats_snapshot_serializes() {
    let mut cache = LruCache::new(18);

    cache.add("name1", "sean".to_string());
    cache.get("name1");
    cache.get("missing");
    cache.add("name2", "emma".to_string());
    cache.add("name3", "alex".to_string());

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.hit_rate(), 0.5);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["total_entries"], 2);
    assert_eq!(json["used_bytes"], 18);
}

// == Degenerate Budgets ==
#[test]
fn test_oversized_entry_converges_to_empty() {
    let mut cache = LruCache::new(4);

    cache.add("big", "a value far larger than the budget".to_string());

    assert!(cache.is_empty());
    assert_eq!(cache.used_bytes(), 0);

    // The cache remains usable afterwards
    cache.add("k", "v".to_string());
    assert_eq!(cache.get("k"), Some(&"v".to_string()));
}

#[test]
fn test_remove_oldest_on_empty_cache() {
    let mut cache: LruCache<String> = LruCache::new(10);

    cache.remove_oldest();
    cache.remove_oldest();

    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
}
