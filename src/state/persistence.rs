use crate::error::Result;
use crate::models::{Item, ItemId};
use crate::state::backend::KeyValueStore;

/// Storage key holding the JSON-encoded item array.
pub const ITEMS_KEY: &str = "items";

/// Mirrors the item collection into a key-value backend.
///
/// Holds no cache: every operation re-reads the stored array, so separate
/// call sites never write back stale data.
#[derive(Debug)]
pub struct ItemStorage<S> {
    backend: S,
}

impl<S: KeyValueStore> ItemStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored items. An absent key is an empty collection.
    pub fn load(&self) -> Result<Vec<Item>> {
        match self.backend.get_item(ITEMS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the stored collection with a single key write.
    pub fn save_all(&mut self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set_item(ITEMS_KEY, &json)
    }

    pub fn append(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load()?;
        items.push(item.clone());
        self.save_all(&items)
    }

    /// Overwrite name and calories of the stored item with the same id.
    pub fn update_one(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load()?;
        for stored in items.iter_mut().filter(|stored| stored.id == item.id) {
            stored.name = item.name.clone();
            stored.calories = item.calories;
        }
        self.save_all(&items)
    }

    pub fn remove_one(&mut self, id: ItemId) -> Result<()> {
        let mut items = self.load()?;
        items.retain(|stored| stored.id != id);
        self.save_all(&items)
    }

    /// Remove the storage key entirely rather than writing an empty array.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove_item(ITEMS_KEY)
    }
}
