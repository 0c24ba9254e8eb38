//! services/api/src/adapters/kv_memory.rs
//!
//! A process-local `KeyValueStore`, used for `STORE_BACKEND=memory` and in tests.

use internhub_core::ports::{KeyValueStore, PortResult};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `value` already stored under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> PortResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
