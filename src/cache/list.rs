//! Access List Module
//!
//! Implements the access-order sequence backing LRU eviction: an arena of
//! slots linked by integer indices into a doubly-linked list. Front = most
//! recently used, back = least recently used. Push, move-to-front and
//! pop-back are all O(1); slot indices stay stable for the lifetime of an
//! entry, so the store can index into the list from its key map.

use crate::cache::Entry;

/// Sentinel for null links in the doubly-linked list.
const NIL: usize = usize::MAX;

// == Slot ==
/// One arena slot. `entry` is `None` while the slot sits on the free list;
/// freed slots are chained through their `next` field.
#[derive(Debug)]
struct Slot<V> {
    entry: Option<Entry<V>>,
    prev: usize,
    next: usize,
}

// == Access List ==
/// Recency-ordered list of cache entries.
#[derive(Debug)]
pub struct AccessList<V> {
    /// Slot arena; live slots are linked between `head` and `tail`
    slots: Vec<Slot<V>>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Head of the free-slot chain
    free_head: usize,
    /// Number of live entries
    len: usize,
}

impl<V> Default for AccessList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AccessList<V> {
    // == Constructor ==
    /// Creates a new empty access list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: NIL,
            tail: NIL,
            free_head: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry at the front (most recently used) and returns the
    /// index of the slot holding it.
    pub fn push_front(&mut self, entry: Entry<V>) -> usize {
        let idx = self.alloc_slot(entry);
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Promotes the entry at `idx` to most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<Entry<V>> {
        if self.tail == NIL {
            return None;
        }

        let idx = self.tail;
        self.unlink(idx);
        let entry = self.slots[idx].entry.take();

        // Recycle the slot
        self.slots[idx].next = self.free_head;
        self.free_head = idx;
        self.len -= 1;

        entry
    }

    // == Get ==
    /// Returns the entry at `idx`, if the slot is live.
    pub fn get(&self, idx: usize) -> Option<&Entry<V>> {
        self.slots.get(idx).and_then(|slot| slot.entry.as_ref())
    }

    /// Mutable access to the entry at `idx`, if the slot is live.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<V>> {
        self.slots.get_mut(idx).and_then(|slot| slot.entry.as_mut())
    }

    // == Peek Back ==
    /// Returns the least recently used entry without removing it.
    pub fn back(&self) -> Option<&Entry<V>> {
        self.get_at(self.tail)
    }

    // == Peek Front ==
    /// Returns the most recently used entry without removing it.
    pub fn front(&self) -> Option<&Entry<V>> {
        self.get_at(self.head)
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Internal Helpers ==
    fn get_at(&self, idx: usize) -> Option<&Entry<V>> {
        if idx == NIL {
            None
        } else {
            self.slots[idx].entry.as_ref()
        }
    }

    /// Takes a slot from the free list, or grows the arena.
    fn alloc_slot(&mut self, entry: Entry<V>) -> usize {
        if self.free_head != NIL {
            let idx = self.free_head;
            self.free_head = self.slots[idx].next;
            self.slots[idx] = Slot {
                entry: Some(entry),
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.slots.push(Slot {
                entry: Some(entry),
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        }
    }

    /// Detaches the slot at `idx` from the list without freeing it.
    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    /// Links the detached slot at `idx` in as the new head.
    fn link_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;

        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
