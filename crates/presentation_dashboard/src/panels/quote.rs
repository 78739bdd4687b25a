//! Quote panel

use domain::Quote;

use super::{FetchState, RequestSequence, RequestTicket, user_message};
use crate::{
    effects::{Effect, GatewayRequest},
    gateway::GatewayError,
};

pub const QUOTE_FALLBACK: &str = "Failed to fetch quote. Please try again.";

/// Shows one random quote
#[derive(Debug)]
pub struct QuotePanel {
    state: FetchState<Quote>,
}

impl QuotePanel {
    /// Mount the panel; the returned effect is the initial fetch
    pub fn mount(sequence: RequestSequence) -> (Self, Effect) {
        let mut panel = Self {
            state: FetchState::new(sequence),
        };
        let effect = panel.get_new_quote();
        (panel, effect)
    }

    pub fn get_new_quote(&mut self) -> Effect {
        Effect::Fetch {
            ticket: self.state.begin(),
            request: GatewayRequest::Quote,
        }
    }

    pub fn on_quote(&mut self, ticket: RequestTicket, result: Result<Quote, GatewayError>) -> bool {
        self.state.apply(ticket, user_message(result, QUOTE_FALLBACK))
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState<Quote> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::FetchView;

    #[test]
    fn mount_fetches_once() {
        let (panel, effect) = QuotePanel::mount(RequestSequence::new());
        assert!(matches!(
            effect,
            Effect::Fetch {
                request: GatewayRequest::Quote,
                ..
            }
        ));
        assert_eq!(panel.state().view(), FetchView::Loading);
    }

    #[test]
    fn shows_quote_on_success() {
        let (mut panel, effect) = QuotePanel::mount(RequestSequence::new());
        let quote = Quote::new("Stay hungry.", "Steve Jobs");
        assert!(panel.on_quote(effect.ticket(), Ok(quote.clone())));
        assert_eq!(panel.state().view(), FetchView::Ready(&quote));
    }

    #[test]
    fn backend_error_text_is_shown() {
        let (mut panel, effect) = QuotePanel::mount(RequestSequence::new());
        panel.on_quote(
            effect.ticket(),
            Err(GatewayError::Api {
                status: 500,
                message: Some("Internal server error".into()),
            }),
        );
        assert_eq!(panel.state().view(), FetchView::Error("Internal server error"));
    }

    #[test]
    fn transport_error_uses_fallback() {
        let (mut panel, effect) = QuotePanel::mount(RequestSequence::new());
        panel.on_quote(effect.ticket(), Err(GatewayError::Connection("refused".into())));
        assert_eq!(panel.state().view(), FetchView::Error(QUOTE_FALLBACK));
    }

    #[test]
    fn only_latest_request_applies() {
        let (mut panel, first) = QuotePanel::mount(RequestSequence::new());
        let second = panel.get_new_quote();

        assert!(panel.on_quote(second.ticket(), Ok(Quote::new("new", "B"))));
        assert!(!panel.on_quote(first.ticket(), Ok(Quote::new("old", "A"))));
        assert_eq!(panel.state().data().map(|q| q.author.as_str()), Some("B"));
    }
}
