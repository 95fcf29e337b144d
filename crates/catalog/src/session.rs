use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value as JsonValue;

use storefront_core::SessionId;

/// Session-scoped key/value bag (the shopper's private session data).
pub trait SessionStore: Send + Sync {
    fn session_id(&self) -> SessionId;
    fn get(&self, key: &str) -> Option<JsonValue>;
    fn set(&self, key: &str, value: JsonValue);
    fn remove(&self, key: &str);
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn session_id(&self) -> SessionId {
        (**self).session_id()
    }

    fn get(&self, key: &str) -> Option<JsonValue> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: JsonValue) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory session store for tests/dev.
#[derive(Debug)]
pub struct InMemorySessionStore {
    id: SessionId,
    inner: RwLock<HashMap<String, JsonValue>>,
}

impl InMemorySessionStore {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionId::new())
    }
}

impl SessionStore for InMemorySessionStore {
    fn session_id(&self) -> SessionId {
        self.id
    }

    fn get(&self, key: &str) -> Option<JsonValue> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: JsonValue) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(key);
        }
    }
}
