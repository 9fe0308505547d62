use unicode_normalization::UnicodeNormalization;

/// Cleans up user-typed lookup queries before they hit the website
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds full-width and compatibility forms
        let text: String = text.nfkc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
