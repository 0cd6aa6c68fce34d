//! Persistence layer: key-value backends and the form collection adapter

mod adapter;
mod store;

pub use adapter::{FormStorage, FORMS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
pub(crate) use store::{temp_store_path, MockKeyValueStore};

use thiserror::Error;

/// Failure in a key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
