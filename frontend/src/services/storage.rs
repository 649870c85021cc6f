use shared::{KeyValueStore, MemoryStore, PersistenceError};
use wasm_bindgen::JsValue;

use super::Logger;

/// `window.localStorage`, or an in-memory map when the browser refuses
/// storage (private mode, disabled cookies). In the fallback case nothing
/// survives a reload, but the app keeps working.
#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        let local = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                Logger::warn_with_component("storage", "localStorage unavailable, data will not persist");
                BrowserStorage::Memory(MemoryStore::new())
            }
        }
    }
}

fn backend_error(error: JsValue) -> PersistenceError {
    let message = error.as_string().unwrap_or_else(|| format!("{:?}", error));
    PersistenceError::Backend(message)
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(backend_error),
            BrowserStorage::Memory(memory) => memory.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(backend_error),
            BrowserStorage::Memory(memory) => memory.write(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fallback_reads_back_writes() {
        let storage = BrowserStorage::Memory(MemoryStore::new());
        assert_eq!(storage.read("cw_expenses_v1"), Ok(None));

        storage.write("cw_expenses_v1", r#"{"version":2,"items":[]}"#).unwrap();
        assert_eq!(storage.read("cw_expenses_v1"), Ok(Some(r#"{"version":2,"items":[]}"#.to_string())));
    }

    #[test]
    fn test_clones_share_the_fallback_map() {
        let storage = BrowserStorage::Memory(MemoryStore::new());
        let other = storage.clone();
        storage.write("key", "value").unwrap();
        assert_eq!(other.read("key"), Ok(Some("value".to_string())));
    }
}
