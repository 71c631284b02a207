//! Local Storage Module
//!
//! Implements the node-local half of the cache: an immutable byte payload
//! and a bounded LRU store.
//!
//! ## Core Concepts
//! - **ByteView**: the read-only value type every other subsystem passes
//!   around. Cloning is cheap; the payload itself can never be mutated.
//! - **Recency eviction**: the store keeps entries on a doubly linked list
//!   ordered by last access and evicts from the cold end whenever the byte
//!   budget is exceeded.
//! - **Byte accounting**: every entry costs `key length + value length`;
//!   the running total is the eviction trigger, not the entry count.
//!
//! The store is deliberately not synchronized. The owning `Group` wraps it
//! in a mutex and keeps critical sections short (probe, touch, insert).

pub mod byteview;
pub mod lru;
