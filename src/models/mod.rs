mod form;
mod item;

pub use form::FormInput;
pub use item::{Calories, Item, ItemId};
