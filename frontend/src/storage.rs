use wasm_bindgen::JsValue;
use web_sys::Storage;

use shared::error::StoreError;
use shared::persist::KeyValueStorage;

/// `window.localStorage` as account store backend.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Storage("window is not available".to_string()))?;
        let storage = window.local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("local storage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}
