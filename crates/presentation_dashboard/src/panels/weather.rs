//! Weather panel
//!
//! Tracks the committed city and a separate search input. Committing a new
//! city refetches; "use my location" first asks the geolocation source and
//! then fetches by coordinates.

use domain::WeatherReport;
use tracing::debug;

use super::{FetchState, RequestSequence, RequestTicket, user_message};
use crate::{
    effects::{Effect, GatewayRequest},
    gateway::GatewayError,
    geolocation::{GeolocationOutcome, UNSUPPORTED_MESSAGE},
};

pub const DEFAULT_CITY: &str = "London";
pub const WEATHER_FALLBACK: &str = "Failed to fetch weather data. Please try again.";

const LOCATING_TEXT: &str = "Getting your location...";
const LOADING_TEXT: &str = "Loading weather data...";

/// Provider icon image for an icon code
#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

#[derive(Debug)]
pub struct WeatherPanel {
    state: FetchState<WeatherReport>,
    current_city: String,
    search_input: String,
    /// Ticket of an in-flight position lookup
    locating: Option<RequestTicket>,
    geolocation_available: bool,
}

impl WeatherPanel {
    /// Mount with the default city; the returned effect fetches it
    pub fn mount(sequence: RequestSequence, geolocation_available: bool) -> (Self, Effect) {
        let mut panel = Self {
            state: FetchState::new(sequence),
            current_city: DEFAULT_CITY.to_string(),
            search_input: String::new(),
            locating: None,
            geolocation_available,
        };
        let effect = panel.fetch_current_city();
        (panel, effect)
    }

    fn fetch_current_city(&mut self) -> Effect {
        self.locating = None;
        Effect::Fetch {
            ticket: self.state.begin(),
            request: GatewayRequest::WeatherByCity(self.current_city.clone()),
        }
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commit the trimmed search input as the current city
    ///
    /// Blank input does nothing. The input is cleared on commit; a fetch is
    /// issued only if the city actually changed.
    pub fn submit_search(&mut self) -> Option<Effect> {
        let city = self.search_input.trim();
        if city.is_empty() {
            return None;
        }

        let city = city.to_string();
        self.search_input.clear();
        if city == self.current_city {
            debug!(city = %city, "City unchanged, not refetching");
            return None;
        }

        self.current_city = city;
        Some(self.fetch_current_city())
    }

    /// Look up the host position, then fetch weather there
    pub fn use_my_location(&mut self) -> Option<Effect> {
        if !self.geolocation_available {
            self.state.fail_locally(UNSUPPORTED_MESSAGE);
            return None;
        }

        let ticket = self.state.begin();
        self.locating = Some(ticket);
        Some(Effect::Locate { ticket })
    }

    /// Handle the geolocation outcome for `ticket`
    pub fn on_location(
        &mut self,
        ticket: RequestTicket,
        outcome: GeolocationOutcome,
    ) -> Option<Effect> {
        if self.locating != Some(ticket) || !self.state.is_current(ticket) {
            debug!(ticket = ticket.id(), "Discarding stale location");
            return None;
        }
        self.locating = None;

        match outcome {
            GeolocationOutcome::Located(location) => Some(Effect::Fetch {
                ticket: self.state.begin(),
                request: GatewayRequest::WeatherByCoords(location),
            }),
            failure => {
                self.state.settle(ticket);
                if let Some(message) = failure.failure_message() {
                    self.state.fail_locally(message);
                }
                None
            },
        }
    }

    pub fn on_weather(
        &mut self,
        ticket: RequestTicket,
        result: Result<WeatherReport, GatewayError>,
    ) -> bool {
        self.state.apply(ticket, user_message(result, WEATHER_FALLBACK))
    }

    /// Loading caption, `None` when idle
    #[must_use]
    pub fn loading_text(&self) -> Option<&'static str> {
        if !self.state.is_loading() {
            None
        } else if self.locating.is_some() {
            Some(LOCATING_TEXT)
        } else {
            Some(LOADING_TEXT)
        }
    }

    #[must_use]
    pub fn current_city(&self) -> &str {
        &self.current_city
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState<WeatherReport> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::FetchView;
    use domain::{GeoLocation, Humidity};

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            country: "GB".to_string(),
            temperature: 15,
            feels_like: 13,
            description: "light rain".to_string(),
            humidity: Humidity::clamped(82),
            wind_speed: 4.12,
            icon: "10d".to_string(),
        }
    }

    fn city_of(effect: &Effect) -> Option<&str> {
        match effect {
            Effect::Fetch {
                request: GatewayRequest::WeatherByCity(city),
                ..
            } => Some(city),
            _ => None,
        }
    }

    #[test]
    fn mount_fetches_london() {
        let (panel, effect) = WeatherPanel::mount(RequestSequence::new(), true);
        assert_eq!(city_of(&effect), Some("London"));
        assert_eq!(panel.current_city(), "London");
        assert_eq!(panel.loading_text(), Some("Loading weather data..."));
    }

    #[test]
    fn submit_trims_commits_and_clears() {
        let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), true);
        panel.set_search_input("  Paris ");
        let effect = panel.submit_search().unwrap();
        assert_eq!(city_of(&effect), Some("Paris"));
        assert_eq!(panel.current_city(), "Paris");
        assert_eq!(panel.search_input(), "");
    }

    #[test]
    fn blank_search_is_noop() {
        let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), true);
        panel.set_search_input("   ");
        assert!(panel.submit_search().is_none());
        assert_eq!(panel.current_city(), "London");
    }

    #[test]
    fn same_city_does_not_refetch() {
        let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), true);
        panel.set_search_input("London");
        assert!(panel.submit_search().is_none());
        assert_eq!(panel.search_input(), "");
    }

    #[test]
    fn not_found_message_from_backend() {
        let (mut panel, effect) = WeatherPanel::mount(RequestSequence::new(), true);
        panel.on_weather(effect.ticket(), Ok(report("London")));

        panel.set_search_input("Atlantis");
        let effect = panel.submit_search().unwrap();
        panel.on_weather(
            effect.ticket(),
            Err(GatewayError::Api {
                status: 404,
                message: Some("City not found. Please check the city name.".into()),
            }),
        );
        assert_eq!(
            panel.state().view(),
            FetchView::Error("City not found. Please check the city name.")
        );
        assert!(panel.state().data().is_none());
    }

    #[test]
    fn location_then_coordinates() {
        let (mut panel, first) = WeatherPanel::mount(RequestSequence::new(), true);
        panel.on_weather(first.ticket(), Ok(report("London")));

        let locate = panel.use_my_location().unwrap();
        assert!(matches!(locate, Effect::Locate { .. }));
        assert_eq!(panel.loading_text(), Some("Getting your location..."));

        let fetch = panel
            .on_location(locate.ticket(), GeolocationOutcome::Located(GeoLocation::new_delhi()))
            .unwrap();
        assert!(matches!(
            fetch,
            Effect::Fetch {
                request: GatewayRequest::WeatherByCoords(_),
                ..
            }
        ));
        assert_eq!(panel.loading_text(), Some("Loading weather data..."));

        assert!(panel.on_weather(fetch.ticket(), Ok(report("New Delhi"))));
        assert_eq!(panel.state().data().map(|r| r.city.as_str()), Some("New Delhi"));
    }

    #[test]
    fn location_failures_map_to_messages() {
        let cases = [
            (
                GeolocationOutcome::PermissionDenied,
                "Unable to get your location. Location access was denied. Please enable location permissions.",
            ),
            (
                GeolocationOutcome::PositionUnavailable,
                "Unable to get your location. Location information is unavailable.",
            ),
            (
                GeolocationOutcome::Timeout,
                "Unable to get your location. Location request timed out.",
            ),
            (
                GeolocationOutcome::Unknown,
                "Unable to get your location. An unknown error occurred.",
            ),
        ];

        for (outcome, expected) in cases {
            let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), true);
            let locate = panel.use_my_location().unwrap();
            assert!(panel.on_location(locate.ticket(), outcome).is_none());
            assert_eq!(panel.loading_text(), None);
            assert_eq!(panel.state().view(), FetchView::Error(expected));
        }
    }

    #[test]
    fn unsupported_host() {
        let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), false);
        assert!(panel.use_my_location().is_none());
        assert_eq!(
            panel.state().error(),
            Some("Geolocation is not supported on this host")
        );
    }

    #[test]
    fn city_search_supersedes_pending_location() {
        let (mut panel, _) = WeatherPanel::mount(RequestSequence::new(), true);
        let locate = panel.use_my_location().unwrap();

        panel.set_search_input("Paris");
        let fetch = panel.submit_search().unwrap();

        let late = panel.on_location(
            locate.ticket(),
            GeolocationOutcome::Located(GeoLocation::new_delhi()),
        );
        assert!(late.is_none());
        assert!(panel.on_weather(fetch.ticket(), Ok(report("Paris"))));
    }

    #[test]
    fn icon_url_format() {
        assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
    }
}
