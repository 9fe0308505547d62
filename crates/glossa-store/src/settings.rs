use glossa_types::{DictionaryInfo, DictionaryKey};
use serde::{Deserialize, Serialize};

use crate::{KeyValueStore, StoreError};

pub const SETTINGS_KEY: &str = "settings";

/// User choices saved between runs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub translation_key: DictionaryKey,
}

impl Settings {
    pub fn new(translation_key: DictionaryKey) -> Self {
        Self { translation_key }
    }

    /// Language names for prompts like "Search English to French translations"
    pub fn dictionary(&self) -> Option<&'static DictionaryInfo> {
        self.translation_key.describe()
    }

    /// Saved settings, or `defaults` when nothing usable is stored
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, defaults: &Settings) -> Result<Self, StoreError> {
        let Some(raw) = store.get_item(SETTINGS_KEY)? else {
            return Ok(defaults.clone());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings: {e}");
                Ok(defaults.clone())
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let raw = serde_json::to_string(self)?;
        store.set_item(SETTINGS_KEY, &raw)
    }

    /// Validate and store a new dictionary choice
    pub fn set_translation_key<S: KeyValueStore + ?Sized>(
        &mut self,
        raw_key: &str,
        store: &mut S,
    ) -> Result<(), StoreError> {
        self.translation_key = raw_key.parse()?;
        tracing::info!("Dictionary set to {}", self.translation_key);
        self.save(store)
    }
}
