//! Quote service - random selection over an injected catalog

use std::{fmt, sync::Arc};

use domain::Quote;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::QuoteSource};

/// Serves one quote per call, chosen uniformly at random
pub struct QuoteService {
    source: Arc<dyn QuoteSource>,
}

impl fmt::Debug for QuoteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteService").finish_non_exhaustive()
    }
}

impl QuoteService {
    /// Create a new quote service
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Pick a quote
    ///
    /// An empty catalog is an internal fault, not a client error.
    #[instrument(skip(self))]
    pub fn random_quote(&self) -> Result<Quote, ApplicationError> {
        let quotes = self.source.quotes();
        let quote = quotes
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| ApplicationError::Internal("quote catalog is empty".to_string()))?;

        debug!(author = %quote.author, "Quote selected");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::ports::MockQuoteSource;

    fn catalog() -> Vec<Quote> {
        vec![
            Quote::new("a", "Ada"),
            Quote::new("b", "Brian"),
            Quote::new("c", "Clara"),
        ]
    }

    #[test]
    fn returns_a_catalog_entry() {
        let mut source = MockQuoteSource::new();
        source.expect_quotes().returning(catalog);
        let service = QuoteService::new(Arc::new(source));

        let quote = service.random_quote().unwrap();
        assert!(catalog().contains(&quote));
    }

    #[test]
    fn eventually_returns_more_than_one_author() {
        let mut source = MockQuoteSource::new();
        source.expect_quotes().returning(catalog);
        let service = QuoteService::new(Arc::new(source));

        let authors: HashSet<_> = (0..200)
            .map(|_| service.random_quote().unwrap().author)
            .collect();
        assert!(authors.len() > 1);
    }

    #[test]
    fn empty_catalog_is_internal_error() {
        let mut source = MockQuoteSource::new();
        source.expect_quotes().returning(Vec::new);
        let service = QuoteService::new(Arc::new(source));

        assert!(matches!(
            service.random_quote(),
            Err(ApplicationError::Internal(_))
        ));
    }
}
