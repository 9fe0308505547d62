use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glossa", version)]
#[command(about = "Bilingual dictionary lookups from the terminal")]
pub struct Cli {
    /// Config file, defaults to config.json in the data directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List autocomplete suggestions for a partial word
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show the translations of a word
    Lookup {
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
        /// Language of the word, defaults to the dictionary's source language
        #[arg(short, long)]
        lang: Option<String>,
        /// Print the dictionary page URL instead of fetching it
        #[arg(long)]
        url: bool,
    },
    /// Recent searches
    Recent {
        #[command(subcommand)]
        action: Option<RecentAction>,
    },
    /// Show or change saved settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// List the available dictionaries
    Dictionaries,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum RecentAction {
    List,
    /// Look up a recent search again
    Open { index: usize },
    Remove { index: usize },
    Clear,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    /// Select the dictionary, e.g. `enfr`
    SetKey { key: String },
}
