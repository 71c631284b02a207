//! Peer Transport Module
//!
//! Everything a node needs to talk to the rest of the fleet.
//!
//! ## Core Concepts
//! - **Contracts** (`types`): the coordinator only ever sees the
//!   `PeerPicker` and `PeerClient` traits, so the transport is swappable.
//! - **HTTP pool** (`pool`, `client`): the default transport. One
//!   `HttpPool` per node holds the consistent-hash ring and one HTTP client
//!   per peer; picking a peer is a ring lookup that excludes the node
//!   itself.
//! - **Serving side** (`handlers`, `protocol`): an axum route at
//!   `<base_path>{group}/{key}` that serves values from the local groups as
//!   raw octet streams, with keys round-tripping byte-for-byte through URL
//!   encoding.

pub mod client;
pub mod handlers;
pub mod pool;
pub mod protocol;
pub mod types;

#[cfg(test)]
mod tests;
