use std::sync::Arc;

use anyhow::Context;
use glossa_client::{DictionaryClient, WordReferenceClient};
use glossa_config::Config;
use glossa_store::{JsonFileStore, KeyValueStore, RecentSearches, Settings, StoreError};

pub struct AppState {
    pub config: Config,
    pub client: Arc<dyn DictionaryClient>,
    pub store: Box<dyn KeyValueStore>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        config: Config,
        client: Arc<dyn DictionaryClient>,
        store: Box<dyn KeyValueStore>,
    ) -> anyhow::Result<Self> {
        let defaults = Settings::new(config.dictionary.translation_key.clone());
        let settings = Settings::load(store.as_ref(), &defaults)?;

        Ok(Self {
            config,
            client,
            store,
            settings,
        })
    }

    /// Real client and the on-disk store
    pub fn open(config: Config) -> anyhow::Result<Self> {
        let client = WordReferenceClient::from_config(&config)
            .context("Failed to build dictionary client")?;

        let store_path = glossa_config::store_path();
        let store = JsonFileStore::open(&store_path)
            .with_context(|| format!("Failed to open store at {}", store_path.display()))?;

        Self::new(config, Arc::new(client), Box::new(store))
    }

    pub fn recent(&mut self) -> Result<RecentSearches<'_, dyn KeyValueStore>, StoreError> {
        RecentSearches::load(self.store.as_mut(), self.config.history.max_entries)
    }
}
