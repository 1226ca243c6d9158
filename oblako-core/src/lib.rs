//! Orchestration core for the oblako terminal client.
//!
//! This crate holds everything that is not presentation: the API client and
//! its error taxonomy, the application state, the action/reducer/effect
//! machinery, and the free-text weather query resolver. The flow is
//! Redux-style:
//!
//! 1. An event produces an [`Action`]
//! 2. The [`Store`] runs the pure [`reducer`], mutating [`AppState`] and
//!    returning declarative [`Effect`]s
//! 3. The runtime executes effects as async tasks that send completion
//!    actions back through the same channel
//!
//! No async code lives in the reducer; network calls in [`ApiClient`] are the
//! only suspension points.

pub mod action;
pub mod api;
pub mod config;
pub mod effect;
pub mod error;
pub mod query;
pub mod reducer;
pub mod state;
pub mod store;
pub mod weather;

pub use action::Action;
pub use api::{ApiClient, ChatReply, HealthReply};
pub use config::ClientConfig;
pub use effect::{DispatchResult, Effect, WEATHER_CITY_ERROR, WEATHER_COORDS_ERROR};
pub use error::ApiError;
pub use query::WeatherQuery;
pub use reducer::{reducer, REPLY_PLACEHOLDER};
pub use state::{
    AppState, ChatState, HealthState, HealthStatus, Message, RequestState, Role, ViewId,
    WeatherState,
};
pub use store::Store;
pub use weather::{icon_glyph, CurrentConditions, DailyForecast, LocationInfo, WeatherSnapshot};
