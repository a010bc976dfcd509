use super::Storage;
use crate::error::{JobDashError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage for tests.
///
/// Uses `RefCell` since the dashboard is single-threaded, which lets the
/// [`Storage`] trait keep `&self` on every method.
#[derive(Default)]
pub struct MemStorage {
    items: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JobDashError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = MemStorage::new();
        assert_eq!(storage.get_item("a").unwrap(), None);

        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.write_count(), 1);

        storage.remove_item("a").unwrap();
        assert!(!storage.contains_key("a"));
        storage.remove_item("a").unwrap();
    }

    #[test]
    fn simulated_write_error() {
        let storage = MemStorage::new();
        storage.set_simulate_write_error(true);
        assert!(storage.set_item("a", "1").is_err());
        assert_eq!(storage.write_count(), 0);
    }
}
