use std::io::{IsTerminal, Write};

use anyhow::Context;
use glossa_core::{DefaultPreprocessor, LookupState, Preprocessor, render_lookup};
use glossa_types::{DictionaryKey, RecentSearch};

use crate::state::AppState;

pub async fn handle_lookup(
    state: &mut AppState,
    word: &str,
    lang: Option<&str>,
    url_only: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let key = state.settings.translation_key.clone();
    let lang = lang.unwrap_or(key.from_lang()).to_string();

    if url_only {
        let word = DefaultPreprocessor.process(word);
        writeln!(out, "{}", state.client.entry_url(&word, &lang, &key)?)?;
        return Ok(());
    }

    show_translation(state, word, &lang, &key, out).await
}

/// Fetch, render and remember one lookup
pub async fn show_translation(
    state: &mut AppState,
    word: &str,
    lang: &str,
    key: &DictionaryKey,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let word = DefaultPreprocessor.process(word);
    anyhow::ensure!(!word.is_empty(), "Nothing to look up");

    if std::io::stderr().is_terminal() {
        eprintln!("{}", render_lookup(LookupState::Loading));
    }

    let entries = state
        .client
        .lookup(&word, lang, key)
        .await
        .with_context(|| format!("Lookup of '{word}' failed"))?;
    tracing::info!("'{}' ({}): {} entries", word, lang, entries.len());

    if state.config.history.enabled {
        state.recent()?.add(RecentSearch {
            word: word.clone(),
            lang: lang.to_string(),
            translation_key: key.direction_for(lang),
        })?;
    }

    let rendered = render_lookup(LookupState::from_entries(Some(&entries)));
    writeln!(out, "{}", rendered.trim_end())?;

    Ok(())
}
