pub mod app;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use app::{Action, AddOutcome, App};
pub use error::{Result, TrackerError};
pub use models::{Calories, FormInput, Item, ItemId};
