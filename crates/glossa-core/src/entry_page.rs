use glossa_types::{Example, TranslationEntry, WordSense};
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::markup::{compile, select_text, select_text_excluding, text_excluding};

const CONTAINER: &str = "#articleWRD";
const ROWS: &str = "#articleWRD tr";

/// Compiled selectors for the dictionary's entry table markup
struct Selectors {
    container: Selector,
    rows: Selector,
    cell: Selector,
    from_word: Selector,
    from_pos: Selector,
    to_word: Selector,
    to_pos: Selector,
    pos: Selector,
    tooltip: Selector,
    dense: Selector,
    dense_span: Selector,
    to_note: Selector,
    from_example: Selector,
    to_example: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ParseError> {
        Ok(Self {
            container: compile(CONTAINER)?,
            rows: compile(ROWS)?,
            cell: compile("td")?,
            from_word: compile(".FrWrd strong")?,
            from_pos: compile(".FrWrd .POS2")?,
            to_word: compile(".ToWrd")?,
            to_pos: compile(".ToWrd .POS2")?,
            pos: compile(".POS2")?,
            tooltip: compile("span")?,
            dense: compile(".dense")?,
            dense_span: compile("span.dense")?,
            to_note: compile(".To2 span")?,
            from_example: compile(".FrEx")?,
            to_example: compile(".ToEx")?,
        })
    }
}

/// A table row reduced to the fields the entry fold cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Row carrying an `id`: opens a new headword
    Headword {
        headword: WordSense,
        first_translation: WordSense,
    },
    /// Row without an `id`: extends the open headword
    Continuation {
        translation: WordSense,
        example_source: String,
        example_target: String,
    },
}

/// Accumulates rows into entries. An entry stays open until the next
/// headword row or [`EntryFold::finish`].
#[derive(Debug, Default)]
pub struct EntryFold {
    entries: Vec<TranslationEntry>,
    current: Option<TranslationEntry>,
}

impl EntryFold {
    pub fn step(mut self, row: Row) -> Self {
        match row {
            Row::Headword {
                headword,
                first_translation,
            } => {
                if let Some(done) = self.current.take() {
                    self.entries.push(done);
                }
                tracing::trace!("Opening entry for headword '{}'", headword.term);
                self.current = Some(TranslationEntry::new(headword, first_translation));
            }
            Row::Continuation {
                translation,
                example_source,
                example_target,
            } => {
                let Some(current) = self.current.as_mut() else {
                    tracing::trace!("Ignoring continuation row before any headword");
                    return self;
                };

                if !translation.term.is_empty() {
                    current.translations.push(translation);
                }
                // Only a row carrying both sentences replaces the example
                if let Some(example) = Example::from_pair(example_source, example_target) {
                    current.example = Some(example);
                }
            }
        }

        self
    }

    /// Close the open entry, if any, and return all entries in row order
    pub fn finish(mut self) -> Vec<TranslationEntry> {
        if let Some(done) = self.current.take() {
            self.entries.push(done);
        }
        self.entries
    }
}

/// Extracts translation entries from a dictionary entry page
pub struct EntryPageParser {
    selectors: Selectors,
}

impl EntryPageParser {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }

    /// Parse an undecoded page body
    pub fn parse_bytes(&self, raw: &[u8]) -> Result<Vec<TranslationEntry>, ParseError> {
        let html = std::str::from_utf8(raw)
            .map_err(|e| ParseError::MalformedDocument(format!("payload is not UTF-8: {e}")))?;
        self.parse(html)
    }

    pub fn parse(&self, raw_html: &str) -> Result<Vec<TranslationEntry>, ParseError> {
        if raw_html.trim().is_empty() {
            tracing::debug!("Empty entry page payload");
            return Ok(Vec::new());
        }

        let document = Html::parse_document(raw_html);

        // No container means no entries, e.g. a "word not found" page
        if document.select(&self.selectors.container).next().is_none() {
            tracing::debug!("No {} container in page", CONTAINER);
            return Ok(Vec::new());
        }

        let entries = document
            .select(&self.selectors.rows)
            .map(|row| self.read_row(row))
            .fold(EntryFold::default(), EntryFold::step)
            .finish();

        tracing::debug!("Parsed {} translation entries", entries.len());
        Ok(entries)
    }

    /// Rows of the entry table as the fold sees them, in document order
    #[cfg(test)]
    pub(crate) fn rows(&self, raw_html: &str) -> Vec<Row> {
        let document = Html::parse_document(raw_html);
        document
            .select(&self.selectors.rows)
            .map(|row| self.read_row(row))
            .collect()
    }

    fn read_row(&self, row: ElementRef<'_>) -> Row {
        let starts_headword = row.value().attr("id").is_some_and(|id| !id.is_empty());

        if starts_headword {
            self.read_headword_row(row)
        } else {
            self.read_continuation_row(row)
        }
    }

    fn read_headword_row(&self, row: ElementRef<'_>) -> Row {
        let s = &self.selectors;

        let (definition, dense_note) = match row.select(&s.cell).nth(1) {
            Some(cell) => (
                text_excluding(cell, &s.dense_span),
                select_text(cell, &s.dense),
            ),
            None => (String::new(), String::new()),
        };

        Row::Headword {
            headword: WordSense {
                term: select_text(row, &s.from_word),
                part_of_speech: select_text_excluding(row, &s.from_pos, &s.tooltip),
                definition,
            },
            first_translation: WordSense {
                term: select_text_excluding(row, &s.to_word, &s.pos),
                part_of_speech: select_text_excluding(row, &s.to_pos, &s.tooltip),
                definition: dense_note,
            },
        }
    }

    fn read_continuation_row(&self, row: ElementRef<'_>) -> Row {
        let s = &self.selectors;

        Row::Continuation {
            translation: WordSense {
                term: select_text_excluding(row, &s.to_word, &s.pos),
                part_of_speech: select_text_excluding(row, &s.to_pos, &s.tooltip),
                definition: select_text(row, &s.to_note),
            },
            example_source: select_text(row, &s.from_example),
            example_target: select_text(row, &s.to_example),
        }
    }
}

/// Parse an entry page with a freshly built parser
pub fn parse_entry_page(raw_html: &str) -> Result<Vec<TranslationEntry>, ParseError> {
    EntryPageParser::new()?.parse(raw_html)
}
