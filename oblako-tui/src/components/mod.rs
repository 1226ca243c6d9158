//! Pure UI components.
//!
//! Each component renders from read-only props and emits actions from
//! `handle_event`; data mutations only ever happen in the reducer. Internal
//! UI state (cursor position) lives in `&mut self`.

pub mod chat_view;
pub mod help_bar;
pub mod status_view;
pub mod tab_bar;
pub mod text_input;
pub mod weather_view;

pub use chat_view::{ChatView, ChatViewProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use status_view::{StatusView, StatusViewProps};
pub use tab_bar::{TabBar, TabBarProps};
pub use text_input::{TextInput, TextInputProps};
pub use weather_view::{WeatherView, WeatherViewProps};

use ratatui::{layout::Rect, Frame};

use oblako_core::Action;

use crate::event::EventKind;

/// Spinner animation frames, advanced by the tick counter.
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Pick the spinner frame for the current tick.
pub fn spinner_frame(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}

/// A pure UI element: props in, actions out.
pub trait Component {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Default is
    /// render-only.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
