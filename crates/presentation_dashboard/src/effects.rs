//! Side effects requested by panels
//!
//! Panels never perform I/O themselves. They return an [`Effect`], the
//! [`EffectRunner`] executes it against the gateway or the geolocation
//! source, and the resulting [`Completion`] is fed back to the dashboard.

use std::{fmt, sync::Arc};

use domain::{ConversionResult, GeoLocation, Quote, WeatherReport};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::{
    gateway::{GatewayError, GatewayPort},
    geolocation::{GeolocationOutcome, GeolocationPort},
    panels::RequestTicket,
};

/// A gateway call a panel wants made
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayRequest {
    Quote,
    WeatherByCity(String),
    WeatherByCoords(GeoLocation),
    Convert {
        amount: String,
        from: String,
        to: String,
    },
}

/// Work issued by a panel, tagged with the ticket its answer must carry
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch {
        ticket: RequestTicket,
        request: GatewayRequest,
    },
    Locate {
        ticket: RequestTicket,
    },
}

impl Effect {
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::Fetch { ticket, .. } | Self::Locate { ticket } => *ticket,
        }
    }
}

/// Answer to an [`Effect`]
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Quote {
        ticket: RequestTicket,
        result: Result<Quote, GatewayError>,
    },
    Weather {
        ticket: RequestTicket,
        result: Result<WeatherReport, GatewayError>,
    },
    Conversion {
        ticket: RequestTicket,
        result: Result<ConversionResult, GatewayError>,
    },
    Location {
        ticket: RequestTicket,
        outcome: GeolocationOutcome,
    },
}

/// Executes effects against the real collaborators
#[derive(Clone)]
pub struct EffectRunner {
    gateway: Arc<dyn GatewayPort>,
    geolocation: Option<Arc<dyn GeolocationPort>>,
}

impl fmt::Debug for EffectRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectRunner")
            .field("geolocation_available", &self.geolocation_available())
            .finish_non_exhaustive()
    }
}

impl EffectRunner {
    pub fn new(
        gateway: Arc<dyn GatewayPort>,
        geolocation: Option<Arc<dyn GeolocationPort>>,
    ) -> Self {
        Self {
            gateway,
            geolocation,
        }
    }

    /// Whether the host can answer `Locate` effects
    #[must_use]
    pub fn geolocation_available(&self) -> bool {
        self.geolocation.is_some()
    }

    /// Run one effect to completion
    pub async fn run(&self, effect: Effect) -> Completion {
        match effect {
            Effect::Fetch { ticket, request } => {
                debug!(ticket = ticket.id(), ?request, "Running gateway request");
                self.fetch(ticket, request).await
            },
            Effect::Locate { ticket } => {
                let outcome = match &self.geolocation {
                    Some(geolocation) => geolocation.locate().await,
                    None => {
                        warn!("Location requested but no geolocation source is configured");
                        GeolocationOutcome::Unknown
                    },
                };
                Completion::Location { ticket, outcome }
            },
        }
    }

    async fn fetch(&self, ticket: RequestTicket, request: GatewayRequest) -> Completion {
        match request {
            GatewayRequest::Quote => Completion::Quote {
                ticket,
                result: self.gateway.quote().await,
            },
            GatewayRequest::WeatherByCity(city) => Completion::Weather {
                ticket,
                result: self.gateway.weather_by_city(&city).await,
            },
            GatewayRequest::WeatherByCoords(location) => Completion::Weather {
                ticket,
                result: self.gateway.weather_by_coords(location).await,
            },
            GatewayRequest::Convert { amount, from, to } => Completion::Conversion {
                ticket,
                result: self.gateway.convert(&amount, &from, &to).await,
            },
        }
    }

    /// Run an effect in the background and deliver its completion on `tx`
    pub fn spawn(&self, effect: Effect, tx: UnboundedSender<Completion>) {
        let runner = self.clone();
        tokio::spawn(async move {
            let completion = runner.run(effect).await;
            // The receiver is gone only during shutdown
            let _ = tx.send(completion);
        });
    }
}
