use super::StorageBackend;
use crate::error::{JobdeckError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage area.
///
/// Uses `RefCell` for interior mutability since jobdeck is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set_item`/`remove_item` fails, like a full or disabled browser storage.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Test helper: store a value bypassing any error simulation.
    pub fn set_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(JobdeckError::Store("Simulated read error".to_string()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JobdeckError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JobdeckError::Store("Simulated write error".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.items.borrow().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn missing_key_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get_item("tracked_jobs").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let backend = MemBackend::new();
        backend.set_item("k", "v").unwrap();
        assert_eq!(backend.get_item("k").unwrap(), Some("v".to_string()));
        backend.remove_item("k").unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn simulated_write_error_leaves_value() {
        let backend = MemBackend::new();
        backend.set_item("k", "old").unwrap();
        backend.set_simulate_write_error(true);
        assert!(backend.set_item("k", "new").is_err());
        assert_eq!(backend.raw("k"), Some("old".to_string()));
    }

    #[test]
    fn shared_through_rc() {
        let backend = Rc::new(MemBackend::new());
        let other = Rc::clone(&backend);
        other.set_item("k", "v").unwrap();
        assert_eq!(backend.get_item("k").unwrap(), Some("v".to_string()));
        assert_eq!(backend.keys().unwrap(), vec!["k".to_string()]);
    }
}
