use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tokio::sync::Notify;

/// One in-flight fetch. Waiters hold the record through an `Arc`, so the
/// result stays readable even after the record leaves the map.
struct Call<T> {
    done: Notify,
    slot: OnceLock<T>,
}

impl<T> Call<T> {
    fn new() -> Self {
        Self {
            done: Notify::new(),
            slot: OnceLock::new(),
        }
    }
}

/// Coalesces concurrent calls for the same key into a single execution.
///
/// For any key, while a call is in flight every additional
/// [`execute`](FlightGroup::execute) blocks without running its own work
/// and then receives a clone of the in-flight call's result. Once the
/// result has been delivered the key is forgotten and the next call starts
/// over.
pub struct FlightGroup<T> {
    calls: Mutex<HashMap<String, Arc<Call<T>>>>,
}

impl<T> Default for FlightGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FlightGroup<T> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Clone> FlightGroup<T> {
    /// Runs `work` for `key` unless a call for the same key is already in
    /// flight, in which case the caller waits for that call's result
    /// instead. Exactly one caller per key executes at a time.
    pub async fn execute<F, Fut>(&self, key: &str, work: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut work = Some(work);
        loop {
            let (call, is_leader) = {
                let mut calls = self.calls.lock();
                match calls.get(key) {
                    Some(existing) => (existing.clone(), false),
                    None => {
                        let call = Arc::new(Call::new());
                        calls.insert(key.to_string(), call.clone());
                        (call, true)
                    }
                }
            };

            if is_leader {
                // The guard unpublishes the record and wakes followers both
                // on completion and if this future is dropped mid-flight.
                let _guard = Unpublish {
                    flight: self,
                    key,
                    call: &call,
                };
                let work = work.take().expect("leader consumes the work closure once");
                let value = work().await;
                let _ = call.slot.set(value.clone());
                return value;
            }

            // Follower: arm the wakeup before re-checking the slot so a
            // completion between the check and the await cannot be missed.
            let notified = call.done.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if let Some(value) = call.slot.get() {
                return value.clone();
            }
            notified.await;
            if let Some(value) = call.slot.get() {
                return value.clone();
            }
            // The leader was dropped without publishing a result. Go back
            // to the map; this caller still owns its closure and may become
            // the new leader.
        }
    }
}

/// Removes the leader's record from the map and releases the followers.
/// Running this on drop covers both the normal return path and leader
/// cancellation.
struct Unpublish<'a, T> {
    flight: &'a FlightGroup<T>,
    key: &'a str,
    call: &'a Arc<Call<T>>,
}

impl<T> Drop for Unpublish<'_, T> {
    fn drop(&mut self) {
        let mut calls = self.flight.calls.lock();
        if let Some(current) = calls.get(self.key) {
            if Arc::ptr_eq(current, self.call) {
                calls.remove(self.key);
            }
        }
        drop(calls);
        self.call.done.notify_waiters();
    }
}
