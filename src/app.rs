use tracing::{debug, info, warn};

use crate::error::Result;
use crate::interface::{parse_row_key, View};
use crate::models::Item;
use crate::state::{ItemStorage, ItemStore, KeyValueStore};

/// A user action the coordinator knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    /// Edit the item shown in the row with this key.
    EditSelect(String),
    Update,
    Delete,
    ClearAll,
    Back,
}

/// Result of an add attempt. Rejections are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Item),
    MissingField,
    NameTaken(String),
}

/// Wires user actions to the item store, its persistence mirror and the view.
///
/// Every action runs store mutation, then persistence, then re-render, then
/// total display, then form reset.
pub struct App<S, V> {
    store: ItemStore,
    storage: ItemStorage<S>,
    view: V,
}

impl<S: KeyValueStore, V: View> App<S, V> {
    /// Seed the store from persisted items.
    pub fn new(storage: ItemStorage<S>, view: V) -> Result<Self> {
        let items = storage.load()?;
        info!("loaded {} items", items.len());
        Ok(Self {
            store: ItemStore::new(items),
            storage,
            view,
        })
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn storage(&self) -> &ItemStorage<S> {
        &self.storage
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Put the view into its startup state.
    pub fn init(&mut self, app_name: &str) {
        self.view.set_app_name(app_name);
        self.view.enter_neutral_mode();

        if self.store.is_empty() {
            self.view.hide_list();
        } else {
            self.view.render_full_list(self.store.items());
            self.view.display_total(self.store.total_calories());
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, "dispatch");
        match action {
            Action::Add => self.add().map(|_| ()),
            Action::EditSelect(key) => self.edit_select(&key),
            Action::Update => self.update(),
            Action::Delete => self.delete(),
            Action::ClearAll => self.clear_all(),
            Action::Back => self.back(),
        }
    }

    pub fn add(&mut self) -> Result<AddOutcome> {
        let input = self.view.read_form_input();
        if input.has_empty_field() {
            return Ok(AddOutcome::MissingField);
        }

        if !self.store.check_name_available(&input.name) {
            warn!(name = %input.name, "name already exists");
            return Ok(AddOutcome::NameTaken(input.name));
        }

        let item = self.store.add_item(&input.name, &input.calories).clone();
        self.storage.append(&item)?;
        self.view.append_row(&item);
        self.view.display_total(self.store.total_calories());
        self.view.reset_form();

        debug!(id = item.id, name = %item.name, "item added");
        Ok(AddOutcome::Added(item))
    }

    pub fn edit_select(&mut self, row_key: &str) -> Result<()> {
        let id = parse_row_key(row_key)?;
        self.store.set_edit_cursor(Some(id))?;
        if let Some(item) = self.store.edit_cursor() {
            self.view.load_cursor_into_form(item);
        }
        Ok(())
    }

    pub fn update(&mut self) -> Result<()> {
        let input = self.view.read_form_input();
        let item = self
            .store
            .apply_edit_to_cursor(&input.name, &input.calories)?
            .clone();

        self.storage.update_one(&item)?;
        self.view.replace_row(&item);
        self.view.display_total(self.store.total_calories());
        self.view.enter_neutral_mode();

        debug!(id = item.id, "item updated");
        Ok(())
    }

    pub fn delete(&mut self) -> Result<()> {
        let item = self.store.remove_cursor_item()?;

        self.storage.remove_one(item.id)?;
        self.view.remove_row(&item);
        self.view.display_total(self.store.total_calories());
        self.view.enter_neutral_mode();

        debug!(id = item.id, "item deleted");
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear_all();

        self.storage.clear()?;
        self.view.clear_all_rows();
        self.view.display_total(self.store.total_calories());
        self.view.enter_neutral_mode();

        debug!("all items cleared");
        Ok(())
    }

    /// Abandon an edit without saving.
    pub fn back(&mut self) -> Result<()> {
        self.store.set_edit_cursor(None)?;
        self.view.enter_neutral_mode();
        Ok(())
    }
}
