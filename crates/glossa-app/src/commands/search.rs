use std::io::Write;

use glossa_core::{DefaultPreprocessor, Preprocessor};

use crate::state::AppState;

pub async fn handle_search(
    state: &AppState,
    query: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = DefaultPreprocessor.process(query);
    let key = &state.settings.translation_key;
    tracing::debug!("Autocomplete '{}' in {}", query, key);

    let suggestions = state.client.autocomplete(&query, key).await?;

    if suggestions.is_empty() {
        let dictionary = key
            .describe()
            .map(|info| format!("{} to {}", info.from, info.to))
            .unwrap_or_else(|| key.to_string());
        writeln!(out, "No {dictionary} suggestions for '{query}'")?;
        return Ok(());
    }

    for suggestion in &suggestions {
        writeln!(out, "{}\t{}", suggestion.term, suggestion.language_code)?;
    }

    Ok(())
}
