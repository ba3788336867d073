use crate::error::{Result, TrackerError};
use crate::models::{Calories, Item, ItemId};

/// Owns the live item collection and the edit cursor.
///
/// Purely in-memory: callers mirror mutations to storage themselves.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    /// Id of the item loaded into the edit form.
    cursor: Option<ItemId>,
}

impl ItemStore {
    /// Create a store seeded with previously persisted items.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            cursor: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One more than the largest id in use, or 0 for an empty collection.
    fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Append a new item. Calories are parsed but not validated.
    pub fn add_item(&mut self, name: &str, calories_text: &str) -> &Item {
        let item = Item::new(self.next_id(), name, Calories::parse(calories_text));
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// True when no existing item has `name` (case-insensitive).
    pub fn check_name_available(&self, name: &str) -> bool {
        !self.items.iter().any(|item| item.has_name(name))
    }

    pub fn total_calories(&self) -> Calories {
        self.items.iter().map(|item| item.calories).sum()
    }

    pub fn item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn edit_cursor(&self) -> Option<&Item> {
        self.cursor.and_then(|id| self.item_by_id(id))
    }

    pub fn set_edit_cursor(&mut self, id: Option<ItemId>) -> Result<()> {
        if let Some(id) = id {
            if self.item_by_id(id).is_none() {
                return Err(TrackerError::ItemNotFound(id));
            }
        }
        self.cursor = id;
        Ok(())
    }

    fn cursor_index(&self) -> Result<usize> {
        let id = self.cursor.ok_or(TrackerError::NoEditCursor)?;
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TrackerError::ItemNotFound(id))
    }

    /// Overwrite the cursor item's fields in place and clear the cursor.
    pub fn apply_edit_to_cursor(&mut self, name: &str, calories_text: &str) -> Result<&Item> {
        let index = self.cursor_index()?;
        self.cursor = None;

        let item = &mut self.items[index];
        item.name = name.to_string();
        item.calories = Calories::parse(calories_text);
        Ok(&*item)
    }

    /// Remove the cursor item from the collection and clear the cursor.
    pub fn remove_cursor_item(&mut self) -> Result<Item> {
        let index = self.cursor_index()?;
        self.cursor = None;
        Ok(self.items.remove(index))
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.cursor = None;
    }
}
