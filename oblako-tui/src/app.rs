//! Top-level UI: tab bar, active view, help bar.
//!
//! Global keys (quit, view switching) are resolved here; everything else is
//! delegated to the component of the active view.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use oblako_core::{Action, AppState, ViewId};

use crate::components::{
    ChatView, ChatViewProps, Component, HelpBar, HelpBarProps, StatusView, StatusViewProps,
    TabBar, TabBarProps, WeatherView, WeatherViewProps,
};
use crate::event::EventKind;
use crate::runtime::EventOutcome;

pub struct AppUi {
    base_url: String,
    chat: ChatView,
    weather: WeatherView,
    status: StatusView,
}

impl AppUi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            chat: ChatView::new(),
            weather: WeatherView::new(),
            status: StatusView,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [tab_area, view_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        TabBar.render(frame, tab_area, TabBarProps { active: state.view });

        match state.view {
            ViewId::Chat => self.chat.render(
                frame,
                view_area,
                ChatViewProps {
                    chat: &state.chat,
                    tick_count: state.tick_count,
                },
            ),
            ViewId::Weather => self.weather.render(
                frame,
                view_area,
                WeatherViewProps {
                    weather: &state.weather,
                    tick_count: state.tick_count,
                },
            ),
            ViewId::Status => self.status.render(
                frame,
                view_area,
                StatusViewProps {
                    health: &state.health,
                    base_url: &self.base_url,
                    tick_count: state.tick_count,
                },
            ),
        }

        HelpBar.render(frame, help_area, HelpBarProps { view: state.view });
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome {
        if let EventKind::Resize(..) = event {
            return EventOutcome::needs_render();
        }

        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            {
                return EventOutcome::action(Action::Quit);
            }
            match key.code {
                KeyCode::Tab => {
                    return EventOutcome::action(Action::NavSelect(state.view.next()));
                }
                KeyCode::BackTab => {
                    return EventOutcome::action(Action::NavSelect(state.view.prev()));
                }
                _ => {}
            }
        }

        let actions = match state.view {
            ViewId::Chat => self
                .chat
                .handle_event(
                    event,
                    ChatViewProps {
                        chat: &state.chat,
                        tick_count: state.tick_count,
                    },
                )
                .into_iter()
                .collect::<Vec<_>>(),
            ViewId::Weather => self
                .weather
                .handle_event(
                    event,
                    WeatherViewProps {
                        weather: &state.weather,
                        tick_count: state.tick_count,
                    },
                )
                .into_iter()
                .collect(),
            ViewId::Status => self
                .status
                .handle_event(
                    event,
                    StatusViewProps {
                        health: &state.health,
                        base_url: &self.base_url,
                        tick_count: state.tick_count,
                    },
                )
                .into_iter()
                .collect(),
        };
        EventOutcome::from_actions(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctrl_key, key, key_code};

    fn ui() -> AppUi {
        AppUi::new("http://127.0.0.1:8000/api")
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let mut app = ui();
        for view in ViewId::ALL {
            let state = AppState {
                view,
                ..Default::default()
            };
            let outcome = app.map_event(&EventKind::Key(ctrl_key('c')), &state);
            assert_eq!(outcome.actions, vec![Action::Quit]);
        }
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = ui();
        let state = AppState::default();

        let outcome = app.map_event(&EventKind::Key(key_code(KeyCode::Tab)), &state);
        assert_eq!(outcome.actions, vec![Action::NavSelect(ViewId::Weather)]);

        let outcome = app.map_event(&EventKind::Key(key_code(KeyCode::BackTab)), &state);
        assert_eq!(outcome.actions, vec![Action::NavSelect(ViewId::Status)]);
    }

    #[test]
    fn test_resize_forces_render() {
        let mut app = ui();
        let outcome = app.map_event(&EventKind::Resize(80, 24), &AppState::default());
        assert!(outcome.needs_render);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn test_plain_keys_go_to_active_view() {
        let mut app = ui();

        // Chat view: characters feed the input field.
        let state = AppState::default();
        let outcome = app.map_event(&EventKind::Key(key('r')), &state);
        assert_eq!(outcome.actions, vec![Action::ChatInput("r".into())]);

        // Status view: the same key triggers a re-check instead.
        let state = AppState {
            view: ViewId::Status,
            ..Default::default()
        };
        let outcome = app.map_event(&EventKind::Key(key('r')), &state);
        assert_eq!(outcome.actions, vec![Action::HealthRefresh]);
    }
}
