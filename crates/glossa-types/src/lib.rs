pub mod dictionary_key;
pub mod types;

pub use dictionary_key::{DictionaryInfo, DictionaryKey, KNOWN_DICTIONARIES, KeyError};
pub use types::{AutocompleteSuggestion, Example, RecentSearch, TranslationEntry, WordSense};
