use gloo::storage::{LocalStorage, Storage};
use shared::{JsonEmployeeStore, KeyValueBackend, StoreError};

/// The browser's `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageBackend;

impl KeyValueBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("reading '{}': {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("writing '{}': {:?}", key, e)))
    }
}

pub type BrowserEmployeeStore = JsonEmployeeStore<LocalStorageBackend>;

/// Employee store over `localStorage` under `key`
pub fn employee_store(key: &str) -> BrowserEmployeeStore {
    JsonEmployeeStore::new(LocalStorageBackend, key)
}
