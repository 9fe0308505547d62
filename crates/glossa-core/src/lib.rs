pub mod autocomplete;
pub mod entry_page;
pub mod error;
pub mod markdown;
mod markup;
pub mod preprocess;

#[cfg(test)]
mod tests;

pub use autocomplete::parse_autocomplete;
pub use entry_page::{EntryFold, EntryPageParser, Row, parse_entry_page};
pub use error::ParseError;
pub use markdown::{LookupState, render_entries, render_lookup};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
