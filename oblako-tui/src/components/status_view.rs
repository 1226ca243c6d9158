//! Status view: backend address and the health probe result.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use oblako_core::{Action, HealthState, HealthStatus};

use super::{spinner_frame, Component};
use crate::event::EventKind;

pub struct StatusView;

pub struct StatusViewProps<'a> {
    pub health: &'a HealthState,
    pub base_url: &'a str,
    pub tick_count: u32,
}

impl Component for StatusView {
    type Props<'a> = StatusViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Char('r') => Some(Action::HealthRefresh),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let status_line = match props.health.status {
            HealthStatus::Checking => Line::from(vec![
                Span::styled(
                    spinner_frame(props.tick_count),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" checking...", Style::default().fg(Color::Gray)),
            ]),
            HealthStatus::Healthy => Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Green)),
                Span::styled("online", Style::default().fg(Color::Green).bold()),
            ]),
            HealthStatus::Error => Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Red)),
                Span::styled("unreachable", Style::default().fg(Color::Red).bold()),
            ]),
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("backend  ", Style::default().fg(Color::DarkGray)),
                Span::raw(props.base_url.to_string()),
            ]),
            Line::from(""),
            status_line,
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to check again", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{key, RenderHarness};

    fn props(health: &HealthState) -> StatusViewProps<'_> {
        StatusViewProps {
            health,
            base_url: "http://127.0.0.1:8000/api",
            tick_count: 0,
        }
    }

    #[test]
    fn test_r_requests_recheck() {
        let health = HealthState::default();
        let got: Vec<Action> = StatusView
            .handle_event(&EventKind::Key(key('r')), props(&health))
            .into_iter()
            .collect();
        assert_eq!(got, vec![Action::HealthRefresh]);
    }

    #[test]
    fn test_q_quits() {
        let health = HealthState::default();
        let got: Vec<Action> = StatusView
            .handle_event(&EventKind::Key(key('q')), props(&health))
            .into_iter()
            .collect();
        assert_eq!(got, vec![Action::Quit]);
    }

    #[test]
    fn test_renders_each_status() {
        let mut harness = RenderHarness::new(50, 10);

        for (status, expected) in [
            (HealthStatus::Checking, "checking"),
            (HealthStatus::Healthy, "online"),
            (HealthStatus::Error, "unreachable"),
        ] {
            let health = HealthState {
                status,
                probed: true,
            };
            let output = harness.render_to_string(|frame| {
                StatusView.render(frame, frame.area(), props(&health));
            });
            assert!(output.contains(expected), "missing {:?}", expected);
            assert!(output.contains("http://127.0.0.1:8000/api"));
        }
    }
}
