//! Cache Entry Module
//!
//! Defines the value contract and the structure for individual cache entries.

// == Value Contract ==
/// Capability required of any payload stored in the cache.
///
/// The cache is payload-agnostic: the only thing it needs from a value is
/// its logical size in bytes, used for capacity accounting.
pub trait ByteSized {
    /// Returns the logical size of the payload in bytes.
    fn byte_len(&self) -> usize;
}

impl ByteSized for String {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl ByteSized for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl ByteSized for Box<[u8]> {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

// == Cache Entry ==
/// A single cache entry: a key paired with its value.
///
/// The key is stored alongside the value so that evicting the tail of the
/// access-order list can also remove the key from the index.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The entry's key
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V: ByteSized> Entry<V> {
    /// Creates a new entry.
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    // == Accounted Size ==
    /// Returns the byte cost charged against capacity for this entry.
    ///
    /// Defined as key length plus the value's reported logical length.
    pub fn accounted_size(&self) -> u64 {
        self.key.len() as u64 + self.value.byte_len() as u64
    }
}
