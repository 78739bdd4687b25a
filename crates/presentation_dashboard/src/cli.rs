//! Command line and interactive commands

use clap::Parser;

use crate::{
    dashboard::{ActivePanel, Dashboard, Tab},
    effects::Effect,
    gateway::DEFAULT_API_URL,
    panels::Side,
};

/// InfoHub terminal dashboard
#[derive(Debug, Parser)]
#[command(name = "infohub-dashboard")]
#[command(author, version, about = "InfoHub terminal dashboard", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Gateway base URL
    #[arg(long, env = "INFOHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Latitude reported by "use my location"
    #[arg(long, env = "INFOHUB_LAT", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude reported by "use my location"
    #[arg(long, env = "INFOHUB_LON", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Give up on a location lookup after this many seconds
    #[arg(long, default_value_t = 10)]
    pub geo_timeout_secs: u64,

    /// Gateway request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    NewQuote,
    Search(String),
    Locate,
    Amount(String),
    Select(Side, String),
    Swap,
    Convert,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  tab <quote|weather|currency>   switch tab
  new                            new quote
  search <city>                  weather for a city
  locate                         weather at your location
  amount <value>                 set amount
  from <CODE> / to <CODE>        pick currencies
  swap                           swap currencies
  convert                        convert now
  help                           show this text
  quit                           exit";

impl Command {
    /// Parse a prompt line
    ///
    /// # Errors
    ///
    /// Returns a message describing the unrecognized input.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let needs_arg = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("{word} needs {what}"))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "tab" => rest.parse().map(Self::Tab),
            "new" => Ok(Self::NewQuote),
            "search" => needs_arg("a city").map(Self::Search),
            "locate" => Ok(Self::Locate),
            "amount" => needs_arg("a value").map(Self::Amount),
            "from" => needs_arg("a currency code").map(|c| Self::Select(Side::From, c)),
            "to" => needs_arg("a currency code").map(|c| Self::Select(Side::To, c)),
            "swap" => Ok(Self::Swap),
            "convert" => Ok(Self::Convert),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

/// Apply a prompt command to the dashboard
///
/// # Errors
///
/// Returns a message when the command belongs to a tab that is not active.
pub fn apply(dashboard: &mut Dashboard, command: Command) -> Result<Option<Effect>, String> {
    if let Command::Tab(tab) = command {
        return Ok(dashboard.select_tab(tab));
    }

    let effect = match (command, dashboard.panel_mut()) {
        (Command::Help | Command::Quit, _) => None,
        (Command::NewQuote, ActivePanel::Quote(panel)) => Some(panel.get_new_quote()),
        (Command::Search(city), ActivePanel::Weather(panel)) => {
            panel.set_search_input(city);
            panel.submit_search()
        },
        (Command::Locate, ActivePanel::Weather(panel)) => panel.use_my_location(),
        (Command::Amount(value), ActivePanel::Currency(panel)) => {
            panel.set_amount(value);
            None
        },
        (Command::Select(side, code), ActivePanel::Currency(panel)) => panel.select(side, &code),
        (Command::Swap, ActivePanel::Currency(panel)) => panel.swap(),
        (Command::Convert, ActivePanel::Currency(panel)) => panel.submit(),
        (_, panel) => {
            return Err(format!(
                "that command is not available on the {} tab",
                panel.tab()
            ));
        },
    };
    Ok(effect)
}
