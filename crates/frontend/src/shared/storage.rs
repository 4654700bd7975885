//! `localStorage` behind the [`KeyValueStore`] trait.

use contracts::shared::error::{DashboardError, Result};
use contracts::shared::storage::KeyValueStore;
use web_sys::{window, Storage};

/// The browser's `localStorage`. Every call fails softly when storage is
/// disabled or the page runs without a window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage> {
        window()
            .ok_or_else(|| DashboardError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| DashboardError::Storage("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))
    }
}
