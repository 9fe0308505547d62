use std::io::Write;

use anyhow::Context;
use glossa_types::DictionaryKey;

use crate::cli::RecentAction;
use crate::commands::lookup::show_translation;
use crate::state::AppState;

pub async fn handle_recent(
    state: &mut AppState,
    action: RecentAction,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match action {
        RecentAction::List => {
            let recent = state.recent()?;
            if recent.list().is_empty() {
                writeln!(out, "No recent searches")?;
            }
            for (index, search) in recent.list().iter().enumerate() {
                writeln!(out, "{index}\t{}\t{}", search.word, search.lang)?;
            }
        }
        RecentAction::Open { index } => {
            let search = state
                .recent()?
                .list()
                .get(index)
                .cloned()
                .with_context(|| format!("No recent search at index {index}"))?;

            let key: DictionaryKey = search
                .translation_key
                .parse()
                .unwrap_or_else(|_| state.settings.translation_key.clone());

            show_translation(state, &search.word, &search.lang, &key, out).await?;
        }
        RecentAction::Remove { index } => match state.recent()?.remove(index)? {
            Some(search) => writeln!(out, "Deleted '{}'", search.word)?,
            None => anyhow::bail!("No recent search at index {index}"),
        },
        RecentAction::Clear => {
            state.recent()?.clear()?;
            writeln!(out, "Cleared recent searches")?;
        }
    }

    Ok(())
}
