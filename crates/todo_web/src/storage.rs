use crate::js_message;
use log::warn;
use todo_core::error::AppError;
use todo_core::storage::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage). Reads then fail and the task list
/// starts empty; writes fail and are logged by the store.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!(
                    "event=storage_open module=web status=unavailable error={}",
                    js_message(&err)
                );
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, AppError> {
        self.storage
            .as_ref()
            .ok_or_else(|| AppError::storage("localStorage is unavailable"))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> AppError {
    AppError::storage(js_message(&value))
}
