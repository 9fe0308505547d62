use std::sync::Arc;

use async_trait::async_trait;
use glossa_config::Config;
use glossa_config::network::NetworkConfig;
use glossa_core::{EntryPageParser, parse_autocomplete};
use glossa_types::{AutocompleteSuggestion, DictionaryKey, TranslationEntry};
use reqwest::{StatusCode, Url};

use crate::{ClientError, DictionaryClient, ProviderMetadata};

#[derive(Clone)]
pub struct WordReferenceClient {
    client: reqwest::Client,
    base_url: Url,
    parser: Arc<EntryPageParser>,
}

impl WordReferenceClient {
    pub fn new(base_url: &str, network: &NetworkConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(network.timeout())
            .user_agent(network.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url,
            parser: Arc::new(EntryPageParser::new()?),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.dictionary.base_url, &config.network)
    }

    pub fn autocomplete_url(&self, query: &str, key: &DictionaryKey) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&["autocomplete"])?;
        url.query_pairs_mut()
            .append_pair("dict", key.as_str())
            .append_pair("query", query);
        Ok(url)
    }

    pub fn page_url(&self, word: &str, lang: &str, key: &DictionaryKey) -> Result<Url, ClientError> {
        let direction = key.direction_for(lang);
        self.endpoint(&[direction.as_str(), word])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Error statuses and empty bodies mean "no suggestions"
fn suggestions_from_response(status: StatusCode, body: Option<&str>) -> Vec<AutocompleteSuggestion> {
    if status.is_client_error() || status.is_server_error() {
        tracing::debug!("Autocomplete returned {status}");
        return Vec::new();
    }

    parse_autocomplete(body.unwrap_or_default())
}

/// A missing page is an empty lookup, other failures surface to the caller
fn entries_from_response(
    parser: &EntryPageParser,
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<TranslationEntry>, ClientError> {
    if status == StatusCode::NOT_FOUND {
        tracing::debug!("Entry page not found");
        return Ok(Vec::new());
    }

    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }

    Ok(parser.parse_bytes(body)?)
}

#[async_trait]
impl DictionaryClient for WordReferenceClient {
    async fn autocomplete(
        &self,
        query: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<AutocompleteSuggestion>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.autocomplete_url(query, key)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(suggestions_from_response(status, Some(body.as_str())))
    }

    async fn lookup(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<TranslationEntry>, ClientError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.page_url(word, lang, key)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        entries_from_response(&self.parser, status, &body)
    }

    fn entry_url(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<String, ClientError> {
        Ok(self.page_url(word.trim(), lang, key)?.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "WordReference".to_string(),
            base_url: self.base_url.to_string(),
        }
    }
}
