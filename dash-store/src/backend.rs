//! Storage backends.
//!
//! The browser backend follows the usual web-sys chain
//! (`window -> local_storage -> get/set_item`), flattening every fallible
//! step into "key absent". Writes are best-effort; storage-quota failures
//! are dropped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Flat string key-value storage.
pub trait StoreBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

/// Browser `localStorage` backend.
///
/// Off wasm32 every operation is a no-op so host builds and tests compile
/// without a browser environment.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StoreBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("k"), None);
        backend.set("k", "v");
        assert_eq!(backend.get("k").as_deref(), Some("v"));
        backend.set("k", "v2");
        assert_eq!(backend.get("k").as_deref(), Some("v2"), "set overwrites");
        backend.remove("k");
        assert_eq!(backend.get("k"), None);
    }

    #[test]
    fn local_storage_backend_is_noop_on_host() {
        let backend = LocalStorageBackend;
        backend.set("k", "v");
        assert_eq!(backend.get("k"), None, "host target has no storage");
        backend.remove("k");
    }
}
