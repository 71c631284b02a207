//! Distributed Read-Through Cache Library
//!
//! This library crate defines the core modules that make up a fleet of
//! cooperating cache nodes. It serves as the foundation for the binary
//! executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`cache`**: The local storage layer. A bounded, byte-accounted LRU
//!   store plus the immutable `ByteView` payload that crosses all component
//!   boundaries.
//! - **`routing`**: The key placement layer. A consistent-hash ring maps
//!   every key to the peer that owns it, using virtual nodes for balance.
//! - **`flight`**: The stampede protection layer. Concurrent lookups for the
//!   same key are coalesced into a single in-flight fetch.
//! - **`group`**: The coordination layer. A `Group` is an isolated cache
//!   namespace that composes the store, the ring and the coalescer with a
//!   user-supplied origin loader; the `CacheManager` registry tracks groups
//!   by name.
//! - **`peers`**: The transport layer. HTTP peer picker/client contracts,
//!   the default `reqwest`-backed pool, and the axum handler other nodes
//!   call to fetch values from this one.

pub mod cache;
pub mod error;
pub mod flight;
pub mod group;
pub mod peers;
pub mod routing;
