use std::fmt;

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::page::{Controls, Row};
use crate::models::FormInput;

/// Entries of the interactive action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Update,
    Delete,
    Back,
    Clear,
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Add => "Add Meal",
            MenuChoice::Edit => "Edit an item",
            MenuChoice::Update => "Update Meal",
            MenuChoice::Delete => "Delete Meal",
            MenuChoice::Back => "Back",
            MenuChoice::Clear => "Clear All",
            MenuChoice::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Menu entries for the currently visible controls.
///
/// Editing is offered only outside edit mode and only when rows exist.
pub fn menu_choices(controls: &Controls, has_rows: bool) -> Vec<MenuChoice> {
    let mut choices = Vec::new();
    if controls.add {
        choices.push(MenuChoice::Add);
    }
    if has_rows && !controls.is_edit_mode() {
        choices.push(MenuChoice::Edit);
    }
    if controls.update {
        choices.push(MenuChoice::Update);
    }
    if controls.delete {
        choices.push(MenuChoice::Delete);
    }
    if controls.back {
        choices.push(MenuChoice::Back);
    }
    if controls.clear {
        choices.push(MenuChoice::Clear);
    }
    choices.push(MenuChoice::Quit);
    choices
}

/// Ask which action to run next.
pub fn prompt_action(controls: &Controls, has_rows: bool) -> Result<MenuChoice> {
    let choices = menu_choices(controls, has_rows);

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(choices[selection])
}

/// Ask for the form fields, starting from their current contents.
pub fn prompt_form(current: &FormInput) -> Result<FormInput> {
    let name: String = Input::new()
        .with_prompt("Meal")
        .with_initial_text(current.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt("Calories")
        .with_initial_text(current.calories.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(FormInput::new(name.trim(), calories.trim()))
}

/// Ask which row to edit. Returns the row key, or `None` if cancelled.
pub fn prompt_row(rows: &[Row]) -> Result<Option<String>> {
    let mut options: Vec<&str> = rows.iter().map(|row| row.content.as_str()).collect();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt("Which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(rows.get(selection).map(|row| row.key.clone()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
