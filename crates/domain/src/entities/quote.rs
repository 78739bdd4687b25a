//! Inspirational quote

use serde::{Deserialize, Serialize};

/// A quote and its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quoted text
    pub text: String,
    /// Who said it
    pub author: String,
}

impl Quote {
    /// Create a quote
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}
