//! Reducer - pure function: (state, action) -> state change + effects.
//!
//! All state mutation happens here, nowhere else. The busy flags enforced
//! here are the only concurrency control: at most one chat send and one
//! weather lookup in flight, with late submissions rejected rather than
//! queued.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::query::WeatherQuery;
use crate::state::{AppState, HealthStatus, RequestState, Role, ViewId};

/// Fixed text appended to the log in place of a failed reply. The real error
/// is never surfaced to the conversation.
pub const REPLY_PLACEHOLDER: &str = "Sorry, I could not get a reply. Please try again.";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Navigation =====
        Action::NavSelect(view) => {
            let mut result = if state.view == view {
                DispatchResult::unchanged()
            } else {
                state.view = view;
                DispatchResult::changed()
            };
            // First entry to the status view kicks off a health probe.
            if view == ViewId::Status && !state.health.probed {
                state.health.probed = true;
                state.health.status = HealthStatus::Checking;
                result = result.with(Effect::CheckHealth).mark_changed();
            }
            result
        }

        // ===== Conversation =====
        Action::ChatInput(value) => {
            state.chat.input = value;
            DispatchResult::changed()
        }

        Action::ChatSubmit => {
            let text = state.chat.input.trim().to_string();
            if text.is_empty() || state.chat.sending {
                return DispatchResult::unchanged();
            }
            // Optimistic append: the user message lands immediately and is
            // never rolled back.
            state.chat.push(Role::User, text.clone());
            state.chat.input.clear();
            state.chat.sending = true;
            DispatchResult::changed_with(Effect::SendChatMessage { text })
        }

        Action::ChatDidReply(text) => {
            state.chat.push(Role::Assistant, text);
            state.chat.sending = false;
            DispatchResult::changed()
        }

        Action::ChatDidFail => {
            state.chat.push(Role::Assistant, REPLY_PLACEHOLDER);
            state.chat.sending = false;
            DispatchResult::changed()
        }

        // ===== Weather =====
        Action::WeatherInput(value) => {
            state.weather.input = value;
            DispatchResult::changed()
        }

        Action::WeatherSubmit => {
            if state.weather.request.is_loading() {
                // One lookup at a time; not queued, not cancelled.
                return DispatchResult::unchanged();
            }
            match WeatherQuery::resolve(&state.weather.input) {
                Ok(query) => {
                    state.weather.request = RequestState::Loading;
                    DispatchResult::changed_with(Effect::FetchWeather(query))
                }
                Err(_) => DispatchResult::unchanged(),
            }
        }

        Action::WeatherDidLoad(snapshot) => {
            state.weather.request = RequestState::Success(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.weather.request = RequestState::Error(message);
            DispatchResult::changed()
        }

        // ===== Health =====
        Action::HealthRefresh => {
            state.health.probed = true;
            state.health.status = HealthStatus::Checking;
            DispatchResult::changed_with(Effect::CheckHealth)
        }

        Action::HealthDidPass => {
            state.health.status = HealthStatus::Healthy;
            DispatchResult::changed()
        }

        Action::HealthDidFail => {
            state.health.status = HealthStatus::Error;
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only re-render while a spinner is visible.
            if state.is_busy() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled by the runtime loop, not here.
            DispatchResult::unchanged()
        }
    }
}
