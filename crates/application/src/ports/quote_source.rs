//! Quote catalog port

use domain::Quote;
#[cfg(test)]
use mockall::automock;

/// Read-only source of quotes
///
/// Implementations hand out a fixed list; the service decides which one to serve.
#[cfg_attr(test, automock)]
pub trait QuoteSource: Send + Sync {
    /// All quotes available for selection
    fn quotes(&self) -> Vec<Quote>;
}
