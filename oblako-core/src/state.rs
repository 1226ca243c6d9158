//! Application state - single source of truth.
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! Each view owns its slice (chat, weather, health) so every store can be
//! constructed and tested in isolation.

use chrono::{DateTime, Local};

use crate::weather::WeatherSnapshot;

/// The three views of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewId {
    #[default]
    Chat,
    Weather,
    Status,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [ViewId::Chat, ViewId::Weather, ViewId::Status];

    /// Parse a view name. Unknown names yield `None`; callers that need a
    /// view fall back to the conversation view via [`ViewId::from_name_or_default`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chat" | "conversation" => Some(ViewId::Chat),
            "weather" => Some(ViewId::Weather),
            "status" | "settings" => Some(ViewId::Status),
            _ => None,
        }
    }

    /// Parse a view name, falling back to [`ViewId::Chat`] for anything
    /// unrecognized.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewId::Chat => "Chat",
            ViewId::Weather => "Weather",
            ViewId::Status => "Status",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewId::Chat => ViewId::Weather,
            ViewId::Weather => ViewId::Status,
            ViewId::Status => ViewId::Chat,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ViewId::Chat => ViewId::Status,
            ViewId::Weather => ViewId::Chat,
            ViewId::Status => ViewId::Weather,
        }
    }
}

/// Lifecycle of a single request, owned by the view store that issued it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Who authored a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Ordinal, strictly increasing in insertion order.
    pub id: u64,
    pub text: String,
    pub role: Role,
    pub timestamp: DateTime<Local>,
}

/// Conversation view state: the ordered message log plus input and the
/// one-in-flight send flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    next_id: u64,
    /// Current content of the input field.
    pub input: String,
    /// True while a send is in flight; further sends are rejected.
    pub sending: bool,
}

impl ChatState {
    /// The full ordered message log. Insertion order is display order and is
    /// never reordered.
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    /// Append a message with a freshly minted id and the current time.
    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text: text.into(),
            role,
            timestamp: Local::now(),
        });
    }
}

/// Weather view state.
#[derive(Clone, Debug, Default)]
pub struct WeatherState {
    /// Current content of the search input.
    pub input: String,
    /// Lifecycle of the last (or current) lookup.
    pub request: RequestState<WeatherSnapshot>,
}

/// Backend health as shown on the status view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Checking,
    Healthy,
    Error,
}

#[derive(Clone, Debug, Default)]
pub struct HealthState {
    pub status: HealthStatus,
    /// Whether a probe has ever been started. The first entry to the status
    /// view triggers one; afterwards only explicit refresh does.
    pub probed: bool,
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: ViewId,
    pub chat: ChatState,
    pub weather: WeatherState,
    pub health: HealthState,
    /// Animation frame counter for loading spinners.
    pub tick_count: u32,
}

impl AppState {
    /// True while any request is in flight (drives spinner animation).
    pub fn is_busy(&self) -> bool {
        self.chat.sending
            || self.weather.request.is_loading()
            || (self.health.probed && self.health.status == HealthStatus::Checking)
    }
}
