//! Plain-text rendering of the dashboard

use std::fmt::Write;

use domain::catalog;

use crate::{
    dashboard::{ActivePanel, Dashboard, Tab},
    panels::{CurrencyPanel, FetchView, QuotePanel, WeatherPanel, icon_url},
};

/// `₹ 100.00`, falling back to the code when it has no symbol
#[must_use]
pub fn format_money(code: &str, value: f64) -> String {
    format!("{} {value:.2}", catalog::symbol_for(code))
}

/// Spot rate to four places
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// Render the whole dashboard: header, navigation and the active panel
#[must_use]
pub fn render(dashboard: &Dashboard) -> String {
    let mut out = String::from("InfoHub Dashboard\n");

    let nav: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == dashboard.active_tab() {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    out.push_str(&nav.join(" "));
    out.push_str("\n\n");

    match dashboard.panel() {
        ActivePanel::Quote(panel) => render_quote(&mut out, panel),
        ActivePanel::Weather(panel) => render_weather(&mut out, panel),
        ActivePanel::Currency(panel) => render_currency(&mut out, panel),
    }
    out
}

fn render_quote(out: &mut String, panel: &QuotePanel) {
    out.push_str("Motivational Quote\n");
    match panel.state().view() {
        FetchView::Loading => out.push_str("Loading quote...\n"),
        FetchView::Error(message) => {
            let _ = writeln!(out, "⚠️ {message}");
        },
        FetchView::Ready(quote) => {
            let _ = writeln!(out, "\"{}\"\n  - {}", quote.text, quote.author);
        },
        FetchView::Empty => {},
    }
}

fn render_weather(out: &mut String, panel: &WeatherPanel) {
    let _ = writeln!(out, "Weather Information ({})", panel.current_city());
    match panel.state().view() {
        FetchView::Loading => {
            if let Some(text) = panel.loading_text() {
                let _ = writeln!(out, "{text}");
            }
        },
        FetchView::Error(message) => {
            let _ = writeln!(out, "⚠️ {message}");
        },
        FetchView::Ready(report) => {
            let _ = writeln!(out, "{}, {}", report.city, report.country);
            let _ = writeln!(out, "{}°C  {}", report.temperature, report.description);
            let _ = writeln!(out, "Feels Like: {}°C", report.feels_like);
            let _ = writeln!(out, "Humidity: {}%", report.humidity.value());
            let _ = writeln!(out, "Wind Speed: {} m/s", report.wind_speed);
            let _ = writeln!(out, "Icon: {}", icon_url(&report.icon));
        },
        FetchView::Empty => {},
    }
}

fn render_currency(out: &mut String, panel: &CurrencyPanel) {
    out.push_str("Currency Converter\n");
    let _ = writeln!(
        out,
        "Amount: {}  From: {} - {}  To: {} - {}",
        panel.amount(),
        panel.from().code,
        panel.from().name,
        panel.to().code,
        panel.to().name,
    );
    match panel.state().view() {
        FetchView::Loading => out.push_str("Fetching latest rates...\n"),
        FetchView::Error(message) => {
            let _ = writeln!(out, "⚠️ {message}");
        },
        FetchView::Ready(result) => {
            let _ = writeln!(
                out,
                "{}: {} {}",
                catalog::name_for(result.from.as_str()),
                format_money(result.from.as_str(), result.from_amount),
                result.from,
            );
            let _ = writeln!(
                out,
                "  → {}: {} {}",
                catalog::name_for(result.to.as_str()),
                format_money(result.to.as_str(), result.to_amount),
                result.to,
            );
            let _ = writeln!(out, "  Rate: {}", format_rate(result.rate));
        },
        FetchView::Empty => {},
    }
}
