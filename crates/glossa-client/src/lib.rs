use glossa_core::ParseError;
use glossa_types::{AutocompleteSuggestion, DictionaryKey, TranslationEntry};

mod wordreference;

pub use wordreference::WordReferenceClient;

/// Dictionary website interface
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Suggestions for a partially typed word
    async fn autocomplete(
        &self,
        query: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<AutocompleteSuggestion>, ClientError>;

    /// Entries of the dictionary page for `word`, read in `lang`
    async fn lookup(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<TranslationEntry>, ClientError>;

    /// Browser URL of the dictionary page for `word`
    fn entry_url(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<String, ClientError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
