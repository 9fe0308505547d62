use glossa_types::TranslationEntry;

/// What a lookup view should show
#[derive(Debug, Clone, Copy)]
pub enum LookupState<'a> {
    Loading,
    NotFound,
    Found(&'a [TranslationEntry]),
}

impl<'a> LookupState<'a> {
    /// A missing payload and a page without entries both read as "not found"
    pub fn from_entries(entries: Option<&'a [TranslationEntry]>) -> Self {
        match entries {
            Some(entries) if !entries.is_empty() => Self::Found(entries),
            _ => Self::NotFound,
        }
    }
}

pub fn render_lookup(state: LookupState<'_>) -> String {
    match state {
        LookupState::Loading => "Loading...".to_string(),
        LookupState::NotFound => "Not found".to_string(),
        LookupState::Found(entries) => render_entries(entries),
    }
}

/// Render entries as Markdown: a heading per headword, a bullet per
/// translation and a block quote for the example.
pub fn render_entries(entries: &[TranslationEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        render_entry(entry, &mut out);
    }
    out
}

fn render_entry(entry: &TranslationEntry, out: &mut String) {
    let headword = &entry.headword;

    out.push_str(&format!("### **{}**", headword.term));
    if !headword.part_of_speech.is_empty() {
        out.push_str(&format!(" *{}*", headword.part_of_speech));
    }
    out.push('\n');
    if !headword.definition.is_empty() {
        out.push_str(&format!("*{}*\n", headword.definition));
    }
    out.push('\n');

    for item in &entry.translations {
        out.push_str(&format!("- **{}**", item.term));
        if !item.part_of_speech.is_empty() {
            out.push_str(&format!(" ({})", item.part_of_speech));
        }
        out.push('\n');
        if !item.definition.is_empty() {
            out.push_str(&format!("  *{}*\n", item.definition));
        }
    }
    out.push('\n');

    if let Some(example) = &entry.example {
        out.push_str(&format!("> {}\n", example.source_sentence));
        out.push_str(&format!("> {}\n\n", example.target_sentence));
    }
}
