pub mod backend;
mod persistence;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use persistence::{ItemStorage, ITEMS_KEY};
pub use store::ItemStore;
