//! Fetch lifecycle shared by every panel
//!
//! A panel asks its [`FetchState`] for a ticket before each request and hands
//! the response back with that ticket. Only the most recently issued ticket
//! is accepted; late answers to superseded requests are dropped.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tracing::debug;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Dashboard-wide ticket counter
///
/// Clones share the counter, so tickets stay unique across panel
/// instances and a remounted panel never accepts its predecessor's answers.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    next: Arc<AtomicU64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// What a panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchView<'a, T> {
    Loading,
    Error(&'a str),
    Ready(&'a T),
    Empty,
}

/// Loading, error and data for one panel
#[derive(Debug)]
pub struct FetchState<T> {
    sequence: RequestSequence,
    latest: Option<RequestTicket>,
    loading: bool,
    error: Option<String>,
    data: Option<T>,
}

impl<T> FetchState<T> {
    pub fn new(sequence: RequestSequence) -> Self {
        Self {
            sequence,
            latest: None,
            loading: false,
            error: None,
            data: None,
        }
    }

    /// Start a request: sets loading, clears the error
    pub fn begin(&mut self) -> RequestTicket {
        let ticket = self.sequence.issue();
        self.latest = Some(ticket);
        self.loading = true;
        self.error = None;
        ticket
    }

    /// Whether `ticket` belongs to the most recent request
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest == Some(ticket)
    }

    /// Apply a response; returns `false` when the ticket is stale
    ///
    /// A failure clears any previous data.
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.id(), "Discarding stale response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            },
            Err(message) => {
                self.data = None;
                self.error = Some(message);
            },
        }
        true
    }

    /// Show an error raised before any request was made
    ///
    /// Existing data is kept but hidden while the error is shown.
    pub fn fail_locally(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// End the loading phase of `ticket` without a response
    pub fn settle(&mut self, ticket: RequestTicket) {
        if self.is_current(ticket) {
            self.loading = false;
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Exactly one of error, loading, data or nothing
    ///
    /// A local error raised while a request is pending wins over the spinner.
    #[must_use]
    pub fn view(&self) -> FetchView<'_, T> {
        if let Some(error) = &self.error {
            FetchView::Error(error)
        } else if self.loading {
            FetchView::Loading
        } else if let Some(data) = &self.data {
            FetchView::Ready(data)
        } else {
            FetchView::Empty
        }
    }
}
