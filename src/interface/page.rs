use crate::error::{Result, TrackerError};
use crate::interface::view::View;
use crate::models::{Calories, FormInput, Item, ItemId};

const ROW_KEY_PREFIX: &str = "id-";

/// Rendering key for the row showing item `id`.
pub fn row_key(id: ItemId) -> String {
    format!("{}{}", ROW_KEY_PREFIX, id)
}

/// Recover the item id from a row key produced by [`row_key`].
pub fn parse_row_key(key: &str) -> Result<ItemId> {
    key.strip_prefix(ROW_KEY_PREFIX)
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| TrackerError::InvalidRowKey(key.to_string()))
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub content: String,
}

impl Row {
    pub fn for_item(item: &Item) -> Self {
        Self {
            key: row_key(item.id),
            content: format!("{}: {} calories", item.name, item.calories),
        }
    }
}

/// Visibility of the five action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub add: bool,
    pub update: bool,
    pub delete: bool,
    pub back: bool,
    pub clear: bool,
}

impl Controls {
    pub fn neutral() -> Self {
        Self {
            add: true,
            update: false,
            delete: false,
            back: false,
            clear: true,
        }
    }

    pub fn edit() -> Self {
        Self {
            add: false,
            update: true,
            delete: true,
            back: true,
            clear: true,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.update && !self.add
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::neutral()
    }
}

/// The visual tree: brand label, item list, entry form, total and controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub brand: String,
    pub rows: Vec<Row>,
    pub list_visible: bool,
    pub name_input: String,
    pub calories_input: String,
    pub total_display: String,
    pub controls: Controls,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            brand: String::new(),
            rows: Vec::new(),
            list_visible: true,
            name_input: String::new(),
            calories_input: String::new(),
            total_display: "0".to_string(),
            controls: Controls::default(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into the form fields, as a user would.
    pub fn fill_form(&mut self, name: impl Into<String>, calories: impl Into<String>) {
        self.name_input = name.into();
        self.calories_input = calories.into();
    }

    pub fn row(&self, key: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }

    fn clear_inputs(&mut self) {
        self.name_input.clear();
        self.calories_input.clear();
    }
}

impl View for Page {
    fn set_app_name(&mut self, name: &str) {
        self.brand = name.to_string();
    }

    fn render_full_list(&mut self, items: &[Item]) {
        self.rows.extend(items.iter().map(Row::for_item));
    }

    fn show_list(&mut self) {
        self.list_visible = true;
    }

    fn hide_list(&mut self) {
        self.list_visible = false;
    }

    fn read_form_input(&self) -> FormInput {
        FormInput::new(self.name_input.clone(), self.calories_input.clone())
    }

    fn append_row(&mut self, item: &Item) {
        self.show_list();
        self.rows.push(Row::for_item(item));
    }

    fn replace_row(&mut self, item: &Item) {
        let replacement = Row::for_item(item);
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == replacement.key) {
            row.content = replacement.content;
        }
    }

    fn remove_row(&mut self, item: &Item) {
        let key = row_key(item.id);
        self.rows.retain(|row| row.key != key);
        if self.rows.is_empty() {
            self.hide_list();
        }
    }

    fn clear_all_rows(&mut self) {
        self.rows.clear();
        self.hide_list();
    }

    fn display_total(&mut self, total: Calories) {
        self.total_display = total.to_string();
    }

    fn load_cursor_into_form(&mut self, item: &Item) {
        self.fill_form(item.name.clone(), item.calories.to_string());
        self.controls = Controls::edit();
    }

    fn reset_form(&mut self) {
        self.clear_inputs();
    }

    fn enter_neutral_mode(&mut self) {
        self.clear_inputs();
        self.controls = Controls::neutral();
    }
}
