use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::Parser;
use glossa_client::{ClientError, DictionaryClient, ProviderMetadata};
use glossa_config::Config;
use glossa_store::{KeyValueStore, MemoryStore};
use glossa_types::{AutocompleteSuggestion, DictionaryKey, TranslationEntry, WordSense};

use crate::cli::{Cli, Command, RecentAction, SettingsAction};
use crate::commands;
use crate::state::AppState;

/// Canned dictionary that records every request it serves
#[derive(Default)]
struct FakeClient {
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DictionaryClient for FakeClient {
    async fn autocomplete(
        &self,
        query: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<AutocompleteSuggestion>, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("autocomplete {query} {key}"));

        if query.starts_with("ch") {
            Ok(vec![
                AutocompleteSuggestion::new("chat", "fr"),
                AutocompleteSuggestion::new("chien", "fr"),
            ])
        } else {
            Ok(Vec::new())
        }
    }

    async fn lookup(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<Vec<TranslationEntry>, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("lookup {word} {lang} {}", key.direction_for(lang)));

        if word != "chat" {
            return Ok(Vec::new());
        }

        let mut entry = TranslationEntry::new(
            WordSense::new("chat", "nm", "animal"),
            WordSense::new("cat", "n", ""),
        );
        entry.translations.push(WordSense::new("kitty", "n", "informal"));
        Ok(vec![entry])
    }

    fn entry_url(
        &self,
        word: &str,
        lang: &str,
        key: &DictionaryKey,
    ) -> Result<String, ClientError> {
        Ok(format!("https://dict.test/{}/{word}", key.direction_for(lang)))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fake".to_string(),
            base_url: "https://dict.test".to_string(),
        }
    }
}

fn state_with(config: Config) -> (AppState, Arc<FakeClient>) {
    let fake = Arc::new(FakeClient::default());
    let state = AppState::new(config, fake.clone(), Box::new(MemoryStore::new())).unwrap();
    (state, fake)
}

async fn run(state: &mut AppState, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    commands::run(state, command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

fn lookup(word: &str, lang: Option<&str>) -> Command {
    Command::Lookup {
        word: vec![word.to_string()],
        lang: lang.map(str::to_string),
        url: false,
    }
}

#[tokio::test]
async fn lookup_prints_markdown_and_records_history() {
    let (mut state, fake) = state_with(Config::default());

    let out = run(&mut state, lookup("  chat ", Some("fr"))).await.unwrap();
    assert!(out.starts_with("### **chat** *nm*\n*animal*\n"));
    assert!(out.contains("- **cat** (n)\n"));
    assert!(out.contains("- **kitty** (n)\n  *informal*"));
    assert_eq!(fake.calls(), ["lookup chat fr fren"]);

    let recent = state.recent().unwrap();
    assert_eq!(recent.list().len(), 1);
    assert_eq!(recent.list()[0].word, "chat");
    assert_eq!(recent.list()[0].lang, "fr");
    assert_eq!(recent.list()[0].translation_key, "fren");
}

#[tokio::test]
async fn lookup_defaults_to_source_language() {
    let (mut state, fake) = state_with(Config::default());

    let out = run(&mut state, lookup("dog", None)).await.unwrap();
    assert_eq!(out, "Not found\n");
    assert_eq!(fake.calls(), ["lookup dog en enfr"]);
}

#[tokio::test]
async fn lookup_url_skips_the_request() {
    let (mut state, fake) = state_with(Config::default());

    let command = Command::Lookup {
        word: vec!["chat".to_string()],
        lang: Some("fr".to_string()),
        url: true,
    };
    let out = run(&mut state, command).await.unwrap();
    assert_eq!(out, "https://dict.test/fren/chat\n");
    assert!(fake.calls().is_empty());
    assert!(state.recent().unwrap().list().is_empty());
}

#[tokio::test]
async fn blank_lookup_is_an_error() {
    let (mut state, fake) = state_with(Config::default());

    assert!(run(&mut state, lookup("   ", None)).await.is_err());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn disabled_history_is_not_recorded() {
    let mut config = Config::default();
    config.history.enabled = false;
    let (mut state, _) = state_with(config);

    run(&mut state, lookup("chat", Some("fr"))).await.unwrap();
    assert!(state.recent().unwrap().list().is_empty());
}

#[tokio::test]
async fn search_lists_suggestions() {
    let (mut state, fake) = state_with(Config::default());

    let command = Command::Search {
        query: vec!["ch".to_string()],
    };
    let out = run(&mut state, command).await.unwrap();
    assert_eq!(out, "chat\tfr\nchien\tfr\n");
    assert_eq!(fake.calls(), ["autocomplete ch enfr"]);
}

#[tokio::test]
async fn search_without_suggestions() {
    let (mut state, _) = state_with(Config::default());

    let command = Command::Search {
        query: vec!["zz".to_string()],
    };
    let out = run(&mut state, command).await.unwrap();
    assert_eq!(out, "No English to French suggestions for 'zz'\n");
}

#[tokio::test]
async fn recent_list_remove_and_clear() {
    let (mut state, _) = state_with(Config::default());
    let recent = |action| Command::Recent {
        action: Some(action),
    };

    assert_eq!(
        run(&mut state, Command::Recent { action: None }).await.unwrap(),
        "No recent searches\n"
    );

    run(&mut state, lookup("chat", Some("fr"))).await.unwrap();
    run(&mut state, lookup("dog", Some("en"))).await.unwrap();

    let out = run(&mut state, recent(RecentAction::List)).await.unwrap();
    assert_eq!(out, "0\tdog\ten\n1\tchat\tfr\n");

    let out = run(&mut state, recent(RecentAction::Remove { index: 0 }))
        .await
        .unwrap();
    assert_eq!(out, "Deleted 'dog'\n");
    assert!(
        run(&mut state, recent(RecentAction::Remove { index: 7 }))
            .await
            .is_err()
    );

    run(&mut state, recent(RecentAction::Clear)).await.unwrap();
    assert!(state.recent().unwrap().list().is_empty());
}

#[tokio::test]
async fn recent_open_repeats_the_lookup() {
    let (mut state, fake) = state_with(Config::default());

    run(&mut state, lookup("chat", Some("fr"))).await.unwrap();
    let out = run(
        &mut state,
        Command::Recent {
            action: Some(RecentAction::Open { index: 0 }),
        },
    )
    .await
    .unwrap();

    assert!(out.contains("**cat**"));
    assert_eq!(fake.calls(), ["lookup chat fr fren", "lookup chat fr fren"]);
    assert_eq!(state.recent().unwrap().list().len(), 1);
}

#[tokio::test]
async fn settings_set_key_persists() {
    let (mut state, fake) = state_with(Config::default());

    let out = run(
        &mut state,
        Command::Settings {
            action: Some(SettingsAction::SetKey {
                key: "ESEN".to_string(),
            }),
        },
    )
    .await
    .unwrap();
    assert!(out.starts_with("Dictionary: esen (Spanish - English)\n"));
    assert!(out.contains("Provider: Fake (https://dict.test)"));
    assert!(state.store.get_item("settings").unwrap().unwrap().contains("esen"));

    run(&mut state, lookup("gato", None)).await.unwrap();
    assert_eq!(fake.calls(), ["lookup gato es esen"]);
}

#[tokio::test]
async fn settings_reject_unknown_key() {
    let (mut state, _) = state_with(Config::default());

    let result = run(
        &mut state,
        Command::Settings {
            action: Some(SettingsAction::SetKey {
                key: "xxyy".to_string(),
            }),
        },
    )
    .await;
    assert!(result.is_err());
    assert_eq!(state.settings.translation_key.as_str(), "enfr");
}

#[test]
fn saved_settings_win_over_config() {
    let mut store = MemoryStore::new();
    store
        .set_item("settings", r#"{"translation_key":"deen"}"#)
        .unwrap();

    let state = AppState::new(
        Config::default(),
        Arc::new(FakeClient::default()),
        Box::new(store),
    )
    .unwrap();
    assert_eq!(state.settings.translation_key.as_str(), "deen");
}

#[tokio::test]
async fn dictionaries_mark_the_current_one() {
    let (mut state, _) = state_with(Config::default());

    let out = run(&mut state, Command::Dictionaries).await.unwrap();
    assert!(out.starts_with("* enfr\tEnglish - French\n  fren\tFrench - English\n"));
    assert_eq!(out.matches('*').count(), 1);
}

#[test]
fn parses_lookup_arguments() {
    let cli = Cli::try_parse_from(["glossa", "lookup", "pomme", "de", "terre", "-l", "fr"]).unwrap();
    match cli.command {
        Command::Lookup { word, lang, url } => {
            assert_eq!(word.join(" "), "pomme de terre");
            assert_eq!(lang.as_deref(), Some("fr"));
            assert!(!url);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn parses_nested_subcommands() {
    let cli = Cli::try_parse_from(["glossa", "--json-logs", "recent", "remove", "3"]).unwrap();
    assert!(cli.json_logs);
    assert!(matches!(
        cli.command,
        Command::Recent {
            action: Some(RecentAction::Remove { index: 3 })
        }
    ));

    let cli = Cli::try_parse_from(["glossa", "settings", "set-key", "enes"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Settings {
            action: Some(SettingsAction::SetKey { .. })
        }
    ));
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["glossa", "search"]).is_err());
}
