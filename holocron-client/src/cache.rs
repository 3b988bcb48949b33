//! Keyed asynchronous cache with in-flight deduplication.
//!
//! For any key there is at most one outstanding load: callers that arrive
//! while a load is running join it and observe the same outcome. Resolved
//! entries live for the process lifetime (the catalog is read-only); failed
//! loads are evicted so the next caller gets a fresh attempt.

use crate::error::FetchError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

enum Slot<T> {
    Pending(broadcast::Sender<Result<T, FetchError>>),
    Resolved(T),
}

enum Role<T> {
    Lead(broadcast::Sender<Result<T, FetchError>>),
    Join(broadcast::Receiver<Result<T, FetchError>>),
}

/// Map from cache key to slot. The cache is the only writer of its slots;
/// callers receive cloned values, never references into the map.
pub struct EntityCache<T> {
    slots: Mutex<HashMap<String, Slot<T>>>,
}

impl<T> EntityCache<T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock_slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_slots(&self) -> MutexGuard<'_, HashMap<String, Slot<T>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> EntityCache<T> {
    /// Return the cached value for `key`, join the load already in flight
    /// for it, or run `loader` and publish its outcome to every joined
    /// caller. The lock is never held across an await; network I/O happens
    /// only inside `loader`.
    pub async fn fetch_or_join<F, Fut>(&self, key: &str, loader: F) -> Result<T, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let role = {
            let mut slots = self.lock_slots();
            match slots.entry(key.to_string()) {
                Entry::Occupied(slot) => match slot.get() {
                    Slot::Resolved(value) => {
                        tracing::debug!(key, "cache hit");
                        return Ok(value.clone());
                    }
                    Slot::Pending(tx) => {
                        tracing::debug!(key, "joining in-flight load");
                        Role::Join(tx.subscribe())
                    }
                },
                Entry::Vacant(slot) => {
                    let (tx, _) = broadcast::channel(1);
                    slot.insert(Slot::Pending(tx.clone()));
                    Role::Lead(tx)
                }
            }
        };

        match role {
            Role::Join(mut rx) => match rx.recv().await {
                Ok(outcome) => outcome,
                Err(_) => Err(FetchError::Interrupted),
            },
            Role::Lead(tx) => {
                // If this future is dropped mid-load, the guard evicts the
                // pending slot so joined waiters unblock instead of hanging.
                let mut cleanup = EvictPending {
                    slots: &self.slots,
                    key,
                    armed: true,
                };
                let outcome = loader().await;
                cleanup.armed = false;
                {
                    let mut slots = self.lock_slots();
                    match &outcome {
                        Ok(value) => {
                            slots.insert(key.to_string(), Slot::Resolved(value.clone()));
                        }
                        Err(error) => {
                            tracing::warn!(key, %error, "load failed; entry evicted");
                            slots.remove(key);
                        }
                    }
                }
                let _ = tx.send(outcome.clone());
                outcome
            }
        }
    }
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EntityCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityCache")
            .field("entries", &self.len())
            .finish()
    }
}

/// While armed, removes the pending slot for `key` on drop. The leader is
/// the only writer for its key while the slot is pending.
struct EvictPending<'a, T> {
    slots: &'a Mutex<HashMap<String, Slot<T>>>,
    key: &'a str,
    armed: bool,
}

impl<T> Drop for EvictPending<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(self.key);
    }
}

// ============================================================================
// TESTS
// ============================================================================
