use glossa_types::RecentSearch;

use crate::{KeyValueStore, StoreError};

pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Most-recent-first lookup history, saved after every change
pub struct RecentSearches<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    max_entries: usize,
    searches: Vec<RecentSearch>,
}

impl<'s, S: KeyValueStore + ?Sized> RecentSearches<'s, S> {
    /// Read the history; an unreadable value starts a fresh one
    pub fn load(store: &'s mut S, max_entries: usize) -> Result<Self, StoreError> {
        let searches = match store.get_item(RECENT_SEARCHES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable recent searches: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Self {
            store,
            max_entries,
            searches,
        })
    }

    pub fn list(&self) -> &[RecentSearch] {
        &self.searches
    }

    /// Put `search` first, dropping an older lookup of the same word in the
    /// same language
    pub fn add(&mut self, search: RecentSearch) -> Result<(), StoreError> {
        self.searches
            .retain(|existing| !existing.matches(&search.word, &search.lang));
        self.searches.insert(0, search);
        self.searches.truncate(self.max_entries);
        self.save()
    }

    pub fn remove(&mut self, index: usize) -> Result<Option<RecentSearch>, StoreError> {
        if index >= self.searches.len() {
            return Ok(None);
        }

        let removed = self.searches.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.searches.clear();
        self.save()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.searches)?;
        self.store.set_item(RECENT_SEARCHES_KEY, &raw)
    }
}
