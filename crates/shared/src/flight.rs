use std::{
    collections::HashSet,
    fmt::Display,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard},
};

/// At most one in-progress operation per key.
///
/// A second request for a busy key is rejected, never queued.
#[derive(Debug)]
pub struct SingleFlight<K> {
    keys: Arc<Mutex<HashSet<K>>>,
}

impl<K> Clone for SingleFlight<K> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<K> Default for SingleFlight<K> {
    fn default() -> Self {
        Self {
            keys: Arc::new(Mutex::new(HashSet::new())),
        }
    }
}

impl<K: Hash + Eq + Clone + Display> SingleFlight<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, key: K) -> crate::Result<FlightGuard<K>> {
        let mut keys = lock(&self.keys);

        if !keys.insert(key.clone()) {
            tracing::warn!(key = %key, "rejected concurrent request");
            return Err(crate::Error::InFlight(key.to_string()));
        }

        tracing::debug!(key = %key, "acquired in-flight guard");

        Ok(FlightGuard {
            key,
            keys: self.keys.clone(),
        })
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        lock(&self.keys).contains(key)
    }
}

/// Releases its key when dropped, including on error paths.
#[derive(Debug)]
pub struct FlightGuard<K: Hash + Eq + Display> {
    key: K,
    keys: Arc<Mutex<HashSet<K>>>,
}

impl<K: Hash + Eq + Display> FlightGuard<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Hash + Eq + Display> Drop for FlightGuard<K> {
    fn drop(&mut self) {
        lock(&self.keys).remove(&self.key);
        tracing::debug!(key = %self.key, "released in-flight guard");
    }
}

fn lock<K>(keys: &Mutex<HashSet<K>>) -> MutexGuard<'_, HashSet<K>> {
    // The set stays consistent even if a holder panicked.
    keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
