use std::io::Write;

use glossa_types::KNOWN_DICTIONARIES;

use crate::cli::Command;
use crate::state::AppState;

pub mod lookup;
pub mod recent;
pub mod search;
pub mod settings;

use lookup::handle_lookup;
use recent::handle_recent;
use search::handle_search;
use settings::handle_settings;

/// Run one CLI command against the app state
pub async fn run(state: &mut AppState, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!("Running command: {:?}", command);
    match command {
        Command::Search { query } => {
            handle_search(state, &query.join(" "), out).await?;
        }
        Command::Lookup { word, lang, url } => {
            handle_lookup(state, &word.join(" "), lang.as_deref(), url, out).await?;
        }
        Command::Recent { action } => {
            handle_recent(state, action.unwrap_or(crate::cli::RecentAction::List), out).await?;
        }
        Command::Settings { action } => {
            handle_settings(state, action.unwrap_or(crate::cli::SettingsAction::Show), out)?;
        }
        Command::Dictionaries => {
            list_dictionaries(state, out)?;
        }
    }

    Ok(())
}

fn list_dictionaries(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    let current = state.settings.translation_key.as_str();
    for info in KNOWN_DICTIONARIES {
        let marker = if info.key == current { '*' } else { ' ' };
        writeln!(out, "{marker} {}\t{} - {}", info.key, info.from, info.to)?;
    }
    Ok(())
}
