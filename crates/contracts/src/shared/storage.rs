use crate::shared::error::{DashboardError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value slot that survives page reloads (browser `localStorage`).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store; can be switched off to behave like disabled storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, like `localStorage` in a locked-down browser.
    pub fn unavailable() -> Self {
        Self {
            items: RefCell::default(),
            disabled: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.disabled {
            return Err(DashboardError::Storage("storage disabled".into()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.disabled {
            return Err(DashboardError::Storage("storage disabled".into()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
