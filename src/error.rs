use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("No item is being edited")]
    NoEditCursor,

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Invalid row key: {0}")]
    InvalidRowKey(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
