//! Built-in quote catalog

use application::ports::QuoteSource;
use domain::Quote;

const QUOTES: [(&str, &str); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is never too late to be what you might have been.",
        "George Eliot",
    ),
];

/// Fixed, read-only quote list
#[derive(Debug, Clone)]
pub struct StaticQuoteSource {
    quotes: Vec<Quote>,
}

impl StaticQuoteSource {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Self::new(
            QUOTES
                .iter()
                .map(|(text, author)| Quote::new(*text, *author))
                .collect(),
        )
    }

    /// A custom list
    pub const fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

impl Default for StaticQuoteSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuoteSource for StaticQuoteSource {
    fn quotes(&self) -> Vec<Quote> {
        self.quotes.clone()
    }
}
