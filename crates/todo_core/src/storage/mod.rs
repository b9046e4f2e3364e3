//! Durable key-value storage and the task collection codec on top of it.

pub mod json_store;
mod memory;

pub use json_store::TaskPersistence;
pub use memory::MemoryStore;

use crate::error::AppError;

/// Origin-scoped string storage, the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}
