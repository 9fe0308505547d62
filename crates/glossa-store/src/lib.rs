use std::path::PathBuf;

use glossa_types::KeyError;

mod json_file;
mod memory;
pub mod recent;
pub mod settings;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use recent::RecentSearches;
pub use settings::Settings;

/// String key-value storage, the persistence contract for settings and history
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidKey(#[from] KeyError),
}
