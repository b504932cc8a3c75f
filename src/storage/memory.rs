use super::LocalStorage;
use crate::core::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory storage backend
///
/// Clones share one underlying map, so two stores handed clones of the
/// same `MemoryStorage` see each other's writes - the same sharing model
/// as two scripts on one page.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.read().map_or(0, |items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read()?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write()?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write()?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_back_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_and_remove_clears() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
        // Removing again is a no-op
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("shared", "yes").unwrap();
        assert_eq!(other.get_item("shared").unwrap().as_deref(), Some("yes"));
    }
}
