//! Bounded LRU Store
//!
//! A key → `ByteView` map with recency eviction driven by a byte budget.
//!
//! ## Mechanism
//! - **Recency list**: entries live in a slot arena and are linked into a
//!   doubly linked list by index, head = most recent, tail = least recent.
//!   Index links keep the implementation in safe Rust while preserving O(1)
//!   touch, insert and tail eviction.
//! - **Index**: a `HashMap` from key to slot position makes every operation
//!   a single hash lookup.
//! - **Accounting**: each entry contributes `key.len() + value.len()` to a
//!   running total; `add` evicts from the tail until the total fits the
//!   budget again. A budget of zero disables eviction entirely.
//!
//! The store is not synchronized; the owning group guards it with a mutex.

use std::collections::HashMap;

use super::byteview::ByteView;

/// Invoked with the evicted key and value every time the store drops an
/// entry to get back under its byte budget.
pub type EvictionCallback = Box<dyn Fn(&str, &ByteView) + Send>;

struct Slot {
    key: String,
    value: ByteView,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct LruStore {
    max_bytes: usize,
    used_bytes: usize,
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    on_evict: Option<EvictionCallback>,
}

impl LruStore {
    /// Creates a store with the given byte budget. A budget of zero means
    /// the store never evicts.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
            on_evict: None,
        }
    }

    /// Creates a store that reports every eviction through `on_evict`.
    pub fn with_eviction_callback(max_bytes: usize, on_evict: EvictionCallback) -> Self {
        let mut store = Self::new(max_bytes);
        store.on_evict = Some(on_evict);
        store
    }

    /// Looks up a key, marking the entry as most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<ByteView> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        self.slots[idx].as_ref().map(|slot| slot.value.clone())
    }

    /// Inserts or replaces a value, then evicts from the cold end until the
    /// byte total fits the budget again. Never fails; a single oversized
    /// entry simply evicts everything else first.
    pub fn add(&mut self, key: &str, value: ByteView) {
        if let Some(&idx) = self.index.get(key) {
            let slot = self.slots[idx]
                .as_mut()
                .expect("indexed slot must be occupied");
            self.used_bytes -= slot.value.len();
            self.used_bytes += value.len();
            slot.value = value;
            self.move_to_front(idx);
        } else {
            self.used_bytes += key.len() + value.len();
            let idx = self.alloc(Slot {
                key: key.to_string(),
                value,
                prev: None,
                next: self.head,
            });
            if let Some(old_head) = self.head {
                if let Some(slot) = self.slots[old_head].as_mut() {
                    slot.prev = Some(idx);
                }
            }
            self.head = Some(idx);
            if self.tail.is_none() {
                self.tail = Some(idx);
            }
            self.index.insert(key.to_string(), idx);
        }

        while self.max_bytes > 0 && self.used_bytes > self.max_bytes {
            self.remove_oldest();
        }
    }

    /// Drops the least recently used entry, if any.
    pub fn remove_oldest(&mut self) {
        let Some(idx) = self.tail else {
            return;
        };
        self.unlink(idx);
        let slot = self.slots[idx]
            .take()
            .expect("tail slot must be occupied");
        self.free.push(idx);
        self.index.remove(&slot.key);
        self.used_bytes -= slot.key.len() + slot.value.len();
        if let Some(on_evict) = &self.on_evict {
            on_evict(&slot.key, &slot.value);
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Current byte total, `key.len() + value.len()` summed over entries.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    fn alloc(&mut self, slot: Slot) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        let old_head = self.head;
        if let Some(slot) = self.slots[idx].as_mut() {
            slot.prev = None;
            slot.next = old_head;
        }
        if let Some(head_idx) = old_head {
            if let Some(slot) = self.slots[head_idx].as_mut() {
                slot.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Detaches a slot from the recency list without freeing it.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_ref() {
            Some(slot) => (slot.prev, slot.next),
            None => return,
        };
        match prev {
            Some(prev_idx) => {
                if let Some(slot) = self.slots[prev_idx].as_mut() {
                    slot.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next_idx) => {
                if let Some(slot) = self.slots[next_idx].as_mut() {
                    slot.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        if let Some(slot) = self.slots[idx].as_mut() {
            slot.prev = None;
            slot.next = None;
        }
    }
}
