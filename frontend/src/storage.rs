use web_sys::Storage;

use shared::errors::StorageError;
use shared::transport::TokenStorage;

use crate::utils::{get_window, js_error_text};

/// `window.localStorage`; survives page reloads within the browser profile.
pub struct LocalStorage;

fn local_storage() -> Result<Storage, StorageError> {
    get_window()
        .and_then(|w| w.local_storage().ok())
        .and_then(|s| s)
        .ok_or(StorageError::Unavailable)
}

impl TokenStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage().ok()
            .and_then(|storage| storage.get_item(key).ok())
            .and_then(|value| value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::WriteFailed(js_error_text(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::WriteFailed(js_error_text(&err)))
    }
}
