use glossa_types::DictionaryKey;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.wordreference.com".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Site root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Dictionary used when no saved setting exists
    #[serde(default)]
    pub translation_key: DictionaryKey,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            translation_key: DictionaryKey::default(),
        }
    }
}
