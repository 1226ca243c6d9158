//! Actions - every state transition enters through one of these.
//!
//! Naming follows the intent/result convention: a bare verb form is a user
//! intent (`ChatSubmit`), a `Did` form carries an async outcome back into the
//! reducer (`ChatDidReply`).

use crate::state::ViewId;
use crate::weather::WeatherSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Navigation
    NavSelect(ViewId),

    // Conversation
    ChatInput(String),
    ChatSubmit,
    ChatDidReply(String),
    /// The send failed. Detail is already logged; the log gets a fixed
    /// placeholder instead.
    ChatDidFail,

    // Weather
    WeatherInput(String),
    WeatherSubmit,
    WeatherDidLoad(WeatherSnapshot),
    /// Lookup failed; carries the generic user-facing text, never raw detail.
    WeatherDidError(String),

    // Health
    HealthRefresh,
    HealthDidPass,
    HealthDidFail,

    // Global
    Tick,
    Quit,
}

impl Action {
    /// Action name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::NavSelect(_) => "NavSelect",
            Action::ChatInput(_) => "ChatInput",
            Action::ChatSubmit => "ChatSubmit",
            Action::ChatDidReply(_) => "ChatDidReply",
            Action::ChatDidFail => "ChatDidFail",
            Action::WeatherInput(_) => "WeatherInput",
            Action::WeatherSubmit => "WeatherSubmit",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::HealthRefresh => "HealthRefresh",
            Action::HealthDidPass => "HealthDidPass",
            Action::HealthDidFail => "HealthDidFail",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
