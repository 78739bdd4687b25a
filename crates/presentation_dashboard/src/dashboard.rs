//! Tab container
//!
//! Exactly one panel is mounted at a time. Switching tabs drops the current
//! panel and mounts a fresh one, which starts from its defaults.

use std::{fmt, str::FromStr};

use tracing::{debug, info};

use crate::{
    effects::{Completion, Effect},
    panels::{CurrencyPanel, QuotePanel, RequestSequence, WeatherPanel},
};

/// Selectable tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Quote,
    Weather,
    Currency,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Quote, Self::Weather, Self::Currency];

    /// Navigation label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quote => "Quote",
            Self::Weather => "Weather",
            Self::Currency => "Converter",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quote" => Ok(Self::Quote),
            "weather" => Ok(Self::Weather),
            "currency" | "converter" => Ok(Self::Currency),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// The mounted panel
#[derive(Debug)]
pub enum ActivePanel {
    Quote(QuotePanel),
    Weather(WeatherPanel),
    Currency(CurrencyPanel),
}

impl ActivePanel {
    #[must_use]
    pub const fn tab(&self) -> Tab {
        match self {
            Self::Quote(_) => Tab::Quote,
            Self::Weather(_) => Tab::Weather,
            Self::Currency(_) => Tab::Currency,
        }
    }
}

#[derive(Debug)]
pub struct Dashboard {
    sequence: RequestSequence,
    geolocation_available: bool,
    panel: ActivePanel,
}

impl Dashboard {
    /// Mount the default tab
    pub fn new(geolocation_available: bool) -> (Self, Option<Effect>) {
        let sequence = RequestSequence::new();
        let (panel, effect) = mount(Tab::default(), &sequence, geolocation_available);
        (
            Self {
                sequence,
                geolocation_available,
                panel,
            },
            effect,
        )
    }

    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.panel.tab()
    }

    #[must_use]
    pub const fn panel(&self) -> &ActivePanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ActivePanel {
        &mut self.panel
    }

    /// Switch tabs; selecting the active tab does nothing
    pub fn select_tab(&mut self, tab: Tab) -> Option<Effect> {
        if tab == self.active_tab() {
            return None;
        }
        info!(from = %self.active_tab(), to = %tab, "Switching tab");
        let (panel, effect) = mount(tab, &self.sequence, self.geolocation_available);
        self.panel = panel;
        effect
    }

    /// Route a completion to the mounted panel
    ///
    /// Completions addressed to a panel that is no longer mounted are dropped.
    pub fn complete(&mut self, completion: Completion) -> Option<Effect> {
        match (&mut self.panel, completion) {
            (ActivePanel::Quote(panel), Completion::Quote { ticket, result }) => {
                panel.on_quote(ticket, result);
                None
            },
            (ActivePanel::Weather(panel), Completion::Weather { ticket, result }) => {
                panel.on_weather(ticket, result);
                None
            },
            (ActivePanel::Weather(panel), Completion::Location { ticket, outcome }) => {
                panel.on_location(ticket, outcome)
            },
            (ActivePanel::Currency(panel), Completion::Conversion { ticket, result }) => {
                panel.on_conversion(ticket, result);
                None
            },
            (panel, completion) => {
                debug!(tab = %panel.tab(), ?completion, "Dropping completion for unmounted panel");
                None
            },
        }
    }
}

fn mount(
    tab: Tab,
    sequence: &RequestSequence,
    geolocation_available: bool,
) -> (ActivePanel, Option<Effect>) {
    match tab {
        Tab::Quote => {
            let (panel, effect) = QuotePanel::mount(sequence.clone());
            (ActivePanel::Quote(panel), Some(effect))
        },
        Tab::Weather => {
            let (panel, effect) = WeatherPanel::mount(sequence.clone(), geolocation_available);
            (ActivePanel::Weather(panel), Some(effect))
        },
        Tab::Currency => {
            let (panel, effect) = CurrencyPanel::mount(sequence.clone());
            (ActivePanel::Currency(panel), effect)
        },
    }
}
