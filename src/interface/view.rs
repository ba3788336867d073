use crate::models::{Calories, FormInput, Item};

/// Rendering capability the coordinator drives.
///
/// Implementations only translate data into visual state and back; they
/// never reach into the item store.
pub trait View {
    fn set_app_name(&mut self, name: &str);

    /// Append one row per item. Callers clear the list first when re-rendering.
    fn render_full_list(&mut self, items: &[Item]);

    fn show_list(&mut self);

    fn hide_list(&mut self);

    fn read_form_input(&self) -> FormInput;

    /// Add a single row and make sure the list is visible.
    fn append_row(&mut self, item: &Item);

    /// Re-render the row keyed by `item.id`.
    fn replace_row(&mut self, item: &Item);

    /// Drop the row keyed by `item.id`, hiding the list once it is empty.
    fn remove_row(&mut self, item: &Item);

    fn clear_all_rows(&mut self);

    fn display_total(&mut self, total: Calories);

    /// Load `item` into the form and switch the controls to edit mode.
    fn load_cursor_into_form(&mut self, item: &Item);

    fn reset_form(&mut self);

    /// Blank the form and show only the add control.
    fn enter_neutral_mode(&mut self);
}
