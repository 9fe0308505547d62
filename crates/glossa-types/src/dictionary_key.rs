use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognized bilingual dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub key: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Dictionaries served by the website, keyed by source+target language code
pub const KNOWN_DICTIONARIES: &[DictionaryInfo] = &[
    DictionaryInfo { key: "enfr", from: "English", to: "French" },
    DictionaryInfo { key: "fren", from: "French", to: "English" },
    DictionaryInfo { key: "enes", from: "English", to: "Spanish" },
    DictionaryInfo { key: "esen", from: "Spanish", to: "English" },
    DictionaryInfo { key: "enit", from: "English", to: "Italian" },
    DictionaryInfo { key: "iten", from: "Italian", to: "English" },
    DictionaryInfo { key: "ende", from: "English", to: "German" },
    DictionaryInfo { key: "deen", from: "German", to: "English" },
    DictionaryInfo { key: "ennl", from: "English", to: "Dutch" },
    DictionaryInfo { key: "nlen", from: "Dutch", to: "English" },
    DictionaryInfo { key: "ensv", from: "English", to: "Swedish" },
    DictionaryInfo { key: "sven", from: "Swedish", to: "English" },
    DictionaryInfo { key: "enru", from: "English", to: "Russian" },
    DictionaryInfo { key: "ruen", from: "Russian", to: "English" },
    DictionaryInfo { key: "enpt", from: "English", to: "Portuguese" },
    DictionaryInfo { key: "pten", from: "Portuguese", to: "English" },
    DictionaryInfo { key: "enpl", from: "English", to: "Polish" },
    DictionaryInfo { key: "plen", from: "Polish", to: "English" },
    DictionaryInfo { key: "enro", from: "English", to: "Romanian" },
    DictionaryInfo { key: "roen", from: "Romanian", to: "English" },
    DictionaryInfo { key: "encz", from: "English", to: "Czech" },
    DictionaryInfo { key: "czen", from: "Czech", to: "English" },
    DictionaryInfo { key: "engr", from: "English", to: "Greek" },
    DictionaryInfo { key: "gren", from: "Greek", to: "English" },
    DictionaryInfo { key: "entr", from: "English", to: "Turkish" },
    DictionaryInfo { key: "tren", from: "Turkish", to: "English" },
    DictionaryInfo { key: "enzh", from: "English", to: "Chinese" },
    DictionaryInfo { key: "zhen", from: "Chinese", to: "English" },
    DictionaryInfo { key: "enja", from: "English", to: "Japanese" },
    DictionaryInfo { key: "jaen", from: "Japanese", to: "English" },
    DictionaryInfo { key: "enko", from: "English", to: "Korean" },
    DictionaryInfo { key: "koen", from: "Korean", to: "English" },
    DictionaryInfo { key: "enar", from: "English", to: "Arabic" },
    DictionaryInfo { key: "aren", from: "Arabic", to: "English" },
    DictionaryInfo { key: "esfr", from: "Spanish", to: "French" },
    DictionaryInfo { key: "fres", from: "French", to: "Spanish" },
    DictionaryInfo { key: "espt", from: "Spanish", to: "Portuguese" },
    DictionaryInfo { key: "ptes", from: "Portuguese", to: "Spanish" },
    DictionaryInfo { key: "esit", from: "Spanish", to: "Italian" },
    DictionaryInfo { key: "ites", from: "Italian", to: "Spanish" },
    DictionaryInfo { key: "esde", from: "Spanish", to: "German" },
    DictionaryInfo { key: "dees", from: "German", to: "Spanish" },
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Dictionary key must be four ASCII letters, got '{0}'")]
    InvalidFormat(String),

    #[error("Unknown dictionary: {0}")]
    Unknown(String),
}

/// Validated dictionary identifier, e.g. `enfr`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DictionaryKey(String);

impl DictionaryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source language code
    pub fn from_lang(&self) -> &str {
        &self.0[..2]
    }

    /// Target language code
    pub fn to_lang(&self) -> &str {
        &self.0[2..]
    }

    /// Orders the pair so that `lang` comes first: `enfr` with `fr` gives `fren`.
    /// A language outside the pair leaves the key unchanged.
    pub fn direction_for(&self, lang: &str) -> String {
        if lang == self.to_lang() && lang != self.from_lang() {
            format!("{}{}", self.to_lang(), self.from_lang())
        } else {
            self.0.clone()
        }
    }

    /// Human-readable language names for this dictionary
    pub fn describe(&self) -> Option<&'static DictionaryInfo> {
        KNOWN_DICTIONARIES.iter().find(|info| info.key == self.0)
    }
}

impl Default for DictionaryKey {
    fn default() -> Self {
        Self("enfr".to_string())
    }
}

impl FromStr for DictionaryKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();

        if key.len() != 4 || !key.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(KeyError::InvalidFormat(s.to_string()));
        }

        if !KNOWN_DICTIONARIES.iter().any(|info| info.key == key) {
            return Err(KeyError::Unknown(key));
        }

        Ok(Self(key))
    }
}

impl TryFrom<String> for DictionaryKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DictionaryKey> for String {
    fn from(key: DictionaryKey) -> Self {
        key.0
    }
}

impl fmt::Display for DictionaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
