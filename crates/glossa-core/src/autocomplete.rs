use glossa_types::AutocompleteSuggestion;

/// Parse the autocomplete payload: one `term<TAB>language` pair per line.
///
/// Lines missing either field are skipped, so a truncated or empty payload
/// yields fewer (or no) suggestions rather than an error.
pub fn parse_autocomplete(raw: &str) -> Vec<AutocompleteSuggestion> {
    let suggestions: Vec<AutocompleteSuggestion> = raw.lines().filter_map(parse_line).collect();
    tracing::debug!("Parsed {} autocomplete suggestions", suggestions.len());
    suggestions
}

fn parse_line(line: &str) -> Option<AutocompleteSuggestion> {
    let mut fields = line.split('\t');
    let term = fields.next()?.trim();
    let language_code = fields.next().map(str::trim).unwrap_or_default();

    if term.is_empty() || language_code.is_empty() {
        if !line.trim().is_empty() {
            tracing::trace!("Skipping autocomplete line: {:?}", line);
        }
        return None;
    }

    Some(AutocompleteSuggestion::new(term, language_code))
}
