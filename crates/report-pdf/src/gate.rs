//! Advisory guard against duplicate concurrent renders

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

/// Set of keys with a render outstanding
#[derive(Debug, Clone, Default)]
pub struct GenerationGate {
    active: Arc<Mutex<HashSet<String>>>,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as generating, or `None` if it already is
    pub fn try_begin(&self, key: &str) -> Option<GenerationGuard> {
        if !lock(&self.active).insert(key.to_string()) {
            debug!(key, "generation already in progress");
            return None;
        }

        Some(GenerationGuard {
            key: key.to_string(),
            active: Arc::clone(&self.active),
        })
    }

    pub fn is_generating(&self, key: &str) -> bool {
        lock(&self.active).contains(key)
    }
}

/// Releases its key when dropped, on success and failure alike
#[derive(Debug)]
pub struct GenerationGuard {
    key: String,
    active: Arc<Mutex<HashSet<String>>>,
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        lock(&self.active).remove(&self.key);
    }
}

// A panic while holding the lock cannot leave the set half-updated
fn lock(active: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
