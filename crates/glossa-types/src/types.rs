use serde::{Deserialize, Serialize};

/// One line of the autocomplete payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteSuggestion {
    pub term: String,
    /// Language the suggested term belongs to, e.g. "fr"
    pub language_code: String,
}

impl AutocompleteSuggestion {
    pub fn new(term: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            language_code: language_code.into(),
        }
    }
}

/// A word together with its grammatical category and gloss
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSense {
    pub term: String,
    pub part_of_speech: String,
    pub definition: String,
}

impl WordSense {
    pub fn new(
        term: impl Into<String>,
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub source_sentence: String,
    pub target_sentence: String,
}

impl Example {
    /// Builds an example only when both sentences carry text
    pub fn from_pair(source: String, target: String) -> Option<Self> {
        if source.is_empty() || target.is_empty() {
            return None;
        }

        Some(Self {
            source_sentence: source,
            target_sentence: target,
        })
    }
}

/// One headword/part-of-speech sense of a dictionary page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Source-language word
    pub headword: WordSense,
    /// Target-language equivalents in page order
    pub translations: Vec<WordSense>,
    pub example: Option<Example>,
}

impl TranslationEntry {
    /// Starts an entry seeded with its first target-language item
    pub fn new(headword: WordSense, first_translation: WordSense) -> Self {
        Self {
            headword,
            translations: vec![first_translation],
            example: None,
        }
    }
}

/// A lookup the user opened, as kept in the recent-search history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub word: String,
    pub lang: String,
    pub translation_key: String,
}

impl RecentSearch {
    /// Same word looked up in the same language
    pub fn matches(&self, word: &str, lang: &str) -> bool {
        self.word == word && self.lang == lang
    }
}
