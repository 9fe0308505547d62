use scraper::{ElementRef, Selector};

use crate::error::ParseError;

pub(crate) fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Text of every element under `root` matching `selector`, concatenated in
/// document order and trimmed.
pub(crate) fn select_text(root: ElementRef<'_>, selector: &Selector) -> String {
    let text: String = root.select(selector).flat_map(|el| el.text()).collect();
    text.trim().to_string()
}

/// Like [`select_text`], but drops any subtree of a match that matches `skip`.
pub(crate) fn select_text_excluding(
    root: ElementRef<'_>,
    selector: &Selector,
    skip: &Selector,
) -> String {
    let mut text = String::new();
    for el in root.select(selector) {
        push_text_excluding(el, skip, &mut text);
    }
    text.trim().to_string()
}

/// Text of `el` itself with `skip` subtrees excised, trimmed.
pub(crate) fn text_excluding(el: ElementRef<'_>, skip: &Selector) -> String {
    let mut text = String::new();
    push_text_excluding(el, skip, &mut text);
    text.trim().to_string()
}

fn push_text_excluding(el: ElementRef<'_>, skip: &Selector, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if skip.matches(&child_el) {
                continue;
            }
            push_text_excluding(child_el, skip, out);
        }
    }
}
