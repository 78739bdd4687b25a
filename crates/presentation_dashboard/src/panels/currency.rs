//! Currency converter panel
//!
//! Amount is kept as typed text. Changing either selector, or swapping them,
//! converts again straight away when the amount is a positive number.

use domain::{
    Amount, ConversionResult,
    catalog::{self, CurrencyInfo},
};
use tracing::debug;

use super::{FetchState, RequestSequence, RequestTicket, user_message};
use crate::{
    effects::{Effect, GatewayRequest},
    gateway::GatewayError,
};

pub const CURRENCY_FALLBACK: &str = "Failed to fetch currency data. Please try again.";
pub const AMOUNT_ERROR: &str = "Please enter a valid positive number.";

const DEFAULT_AMOUNT: &str = "100";
const DEFAULT_FROM: &str = "INR";
const DEFAULT_TO: &str = "USD";

/// Which selector an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

#[derive(Debug)]
pub struct CurrencyPanel {
    state: FetchState<ConversionResult>,
    amount: String,
    from: &'static CurrencyInfo,
    to: &'static CurrencyInfo,
}

impl CurrencyPanel {
    /// Mount with `100 INR → USD`; the returned effect is the first conversion
    pub fn mount(sequence: RequestSequence) -> (Self, Option<Effect>) {
        let mut panel = Self {
            state: FetchState::new(sequence),
            amount: DEFAULT_AMOUNT.to_string(),
            from: lookup(DEFAULT_FROM),
            to: lookup(DEFAULT_TO),
        };
        let effect = panel.auto_convert();
        (panel, effect)
    }

    /// Edit the amount text; does not convert
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    /// Change one selector
    ///
    /// Codes outside the catalog are rejected with an inline error and leave
    /// the selection untouched. Re-selecting the current code does nothing.
    pub fn select(&mut self, side: Side, code: &str) -> Option<Effect> {
        let code = code.trim().to_ascii_uppercase();
        let Some(info) = catalog::find(&code) else {
            self.state
                .fail_locally(format!("Unsupported currency: {code}"));
            return None;
        };

        let slot = match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        };
        if slot.code == info.code {
            return None;
        }
        *slot = info;
        self.auto_convert()
    }

    /// Exchange the selectors and convert once with the reversed pair
    pub fn swap(&mut self) -> Option<Effect> {
        std::mem::swap(&mut self.from, &mut self.to);
        self.auto_convert()
    }

    /// Convert on explicit request, validating the amount first
    pub fn submit(&mut self) -> Option<Effect> {
        match Amount::parse(&self.amount) {
            Ok(amount) => Some(self.convert(amount)),
            Err(_) => {
                self.state.fail_locally(AMOUNT_ERROR);
                None
            },
        }
    }

    fn auto_convert(&mut self) -> Option<Effect> {
        match Amount::parse(&self.amount) {
            Ok(amount) => Some(self.convert(amount)),
            Err(_) => {
                debug!(amount = %self.amount, "Skipping conversion for invalid amount");
                None
            },
        }
    }

    fn convert(&mut self, amount: Amount) -> Effect {
        Effect::Fetch {
            ticket: self.state.begin(),
            request: GatewayRequest::Convert {
                amount: amount.to_string(),
                from: self.from.code.to_string(),
                to: self.to.code.to_string(),
            },
        }
    }

    pub fn on_conversion(
        &mut self,
        ticket: RequestTicket,
        result: Result<ConversionResult, GatewayError>,
    ) -> bool {
        self.state.apply(ticket, user_message(result, CURRENCY_FALLBACK))
    }

    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    #[must_use]
    pub const fn from(&self) -> &'static CurrencyInfo {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> &'static CurrencyInfo {
        self.to
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState<ConversionResult> {
        &self.state
    }
}

fn lookup(code: &str) -> &'static CurrencyInfo {
    catalog::find(code).unwrap_or(&catalog::CURRENCIES[0])
}
