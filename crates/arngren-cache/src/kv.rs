//! Key-value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::CacheError;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::BTreeMap<String, String>> =
        const { std::cell::RefCell::new(std::collections::BTreeMap::new()) };
}

/// Type-safe cache backed by the browser's `localStorage`.
///
/// Values serializing to a JSON string are stored as the bare string, so a
/// theme flag is kept as `dark` rather than `"dark"`. Everything else is
/// stored as JSON text.
pub struct Cache {
    #[cfg(target_arch = "wasm32")]
    store: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    _phantom: std::marker::PhantomData<()>,
}

impl Cache {
    /// Open the origin's `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn open_default() -> Result<Self, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(js_error(e)))?
            .ok_or_else(|| CacheError::OpenError("localStorage unavailable".to_string()))?;
        Ok(Self { store })
    }

    /// Open the thread's in-memory store.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self {
            _phantom: std::marker::PhantomData,
        })
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            // bare string written by `set`
            Err(_) => Ok(Some(serde_json::from_value(Value::String(raw))?)),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = match serde_json::to_value(value)? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        tracing::trace!(key, "cache set");
        self.set_raw(key, &raw)
    }

    #[cfg(target_arch = "wasm32")]
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store
            .get_item(key)
            .map_err(|e| CacheError::StoreError(js_error(e)))
    }

    #[cfg(target_arch = "wasm32")]
    fn set_raw(&self, key: &str, raw: &str) -> Result<(), CacheError> {
        self.store
            .set_item(key, raw)
            .map_err(|e| CacheError::StoreError(js_error(e)))
    }

    // In-memory backend for native builds
    #[cfg(not(target_arch = "wasm32"))]
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(MEMORY.with(|m| m.borrow().get(key).cloned()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_raw(&self, key: &str, raw: &str) -> Result<(), CacheError> {
        MEMORY.with(|m| m.borrow_mut().insert(key.to_string(), raw.to_string()));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
