//! Stampede Protection Module
//!
//! Collapses concurrent fetches for the same key into one in-flight call.
//!
//! ## Core Concepts
//! - **Leader / follower**: the first caller for a key runs the actual
//!   fetch; everyone arriving while it is in flight waits on the shared
//!   call record and receives a clone of the same result.
//! - **Record lifecycle**: the record exists only while the fetch is in
//!   flight. It is removed once the result is published, so a later call
//!   for the same key starts a fresh fetch.
//! - **Abandonment**: a leader whose future is dropped removes its record
//!   and wakes the followers, one of which takes over as the new leader.
//!
//! The map lock is held only to look up, publish or delete records; the
//! fetch itself runs unlocked so distinct keys never serialize each other.

pub mod coalescer;
