use std::io::Write;

use crate::cli::SettingsAction;
use crate::state::AppState;

pub fn handle_settings(
    state: &mut AppState,
    action: SettingsAction,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {}
        SettingsAction::SetKey { key } => {
            state
                .settings
                .set_translation_key(&key, state.store.as_mut())?;
        }
    }

    let key = &state.settings.translation_key;
    match state.settings.dictionary() {
        Some(info) => writeln!(out, "Dictionary: {key} ({} - {})", info.from, info.to)?,
        None => writeln!(out, "Dictionary: {key}")?,
    }
    let provider = state.client.metadata();
    writeln!(out, "Provider: {} ({})", provider.name, provider.base_url)?;
    writeln!(out, "History: {}", if state.config.history.enabled { "on" } else { "off" })?;

    Ok(())
}
