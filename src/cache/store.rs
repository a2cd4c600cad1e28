use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;
use tracing::debug;

use super::key::CacheKey;
use crate::github::queries::Document;

/// In-memory store of query results, shared by every clone.
///
/// Entries live for the lifetime of the process. Concurrent writers to one key
/// are not coordinated: the last write wins.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<CacheKey, Value>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Value>> {
        // A panic while holding the lock cannot leave a map half-written
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn read_query(&self, document: &Document, variables: &Value) -> Option<Value> {
        let key = CacheKey::new(document, variables);
        let hit = self.lock().get(&key).cloned();
        debug!(key = %key, hit = hit.is_some(), "Cache read");
        hit
    }

    pub fn write_query(&self, document: &Document, variables: &Value, data: Value) {
        let key = CacheKey::new(document, variables);
        debug!(key = %key, "Cache write");
        self.lock().insert(key, data);
    }

    pub fn evict(&self, document: &Document, variables: &Value) -> bool {
        let key = CacheKey::new(document, variables);
        let removed = self.lock().remove(&key).is_some();
        if removed {
            debug!(key = %key, "Cache entry evicted");
        }
        removed
    }

    pub fn clear(&self) {
        self.lock().clear();
        debug!("Cache cleared");
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
