#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}
