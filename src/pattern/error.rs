// Sat Oct 17 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown pattern kind: {0}")]
    UnknownKind(String),
    #[error("Empty template for word '{0}'")]
    EmptyTemplate(String),
    #[error("Invalid character '{character}' in template for word '{word}'")]
    InvalidTemplate { word: String, character: char },
}
