//! Typed adapter over the tab's session storage.
//!
//! All operations are infallible from the caller's point of view: quota and
//! privacy-mode errors are swallowed on write, and any read or parse failure
//! falls back to the provided default. Entries are single-tab scoped; there
//! is no storage-event listener, so two tabs writing the same key can race.
//! Known limitation, accepted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Serialize `value` and store it under `key`
pub fn save<T: Serialize>(key: &str, value: &T) {
    if let Some(storage) = session_storage() {
        if let Ok(serialized) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &serialized);
        }
    }
}

/// Read and deserialize the entry under `key`; any failure returns `fallback`
pub fn load<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    let Some(storage) = session_storage() else {
        return fallback;
    };
    match storage.get_item(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(fallback),
        _ => fallback,
    }
}

/// Remove the entry under `key`; removing an absent key is a no-op
pub fn remove(key: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
        nested: Vec<i64>,
    }

    #[wasm_bindgen_test]
    fn save_load_round_trips() {
        let value = Sample {
            name: "alice".to_string(),
            count: 3,
            nested: vec![1, -2, 3],
        };
        save("test.round_trip", &value);
        let loaded: Option<Sample> = load("test.round_trip", None);
        assert_eq!(loaded.as_ref(), Some(&value));
        remove("test.round_trip");
    }

    #[wasm_bindgen_test]
    fn load_missing_key_returns_fallback() {
        let loaded: u32 = load("test.never_written", 7);
        assert_eq!(loaded, 7);
    }

    #[wasm_bindgen_test]
    fn load_garbage_returns_fallback() {
        let storage = session_storage().unwrap();
        storage.set_item("test.garbage", "{not json").unwrap();
        let loaded: Option<Sample> = load("test.garbage", None);
        assert!(loaded.is_none());
        remove("test.garbage");
    }

    #[wasm_bindgen_test]
    fn remove_absent_key_is_noop() {
        remove("test.absent");
        remove("test.absent");
    }
}
