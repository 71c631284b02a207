//! Key Placement Module
//!
//! Maps every cache key to the peer that owns it, so that each key has one
//! authoritative home in the fleet and lookups for it converge there.
//!
//! ## Mechanism
//! - **Virtual nodes**: each peer occupies `replicas` synthetic points on a
//!   hash ring, which smooths the key distribution across small fleets.
//! - **Clockwise search**: a key is owned by the peer whose first virtual
//!   node hash is at or after the key's hash, wrapping to the start of the
//!   ring when none is.
//! - **Injectable hash**: the hash function is a constructor parameter so
//!   placement tests can substitute a deterministic one.
//!
//! The ring itself is a plain data structure; the peer pool serializes
//! access to it with its own mutex.

pub mod ring;

#[cfg(test)]
mod tests;
