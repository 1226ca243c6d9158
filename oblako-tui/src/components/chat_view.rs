//! Conversation view: the message log above a send field.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use oblako_core::{Action, ChatState, Message, Role};

use super::{spinner_frame, Component, TextInput, TextInputProps};
use crate::event::EventKind;

pub struct ChatView {
    input: TextInput,
}

pub struct ChatViewProps<'a> {
    pub chat: &'a ChatState,
    pub tick_count: u32,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
        }
    }

    fn input_props<'a>(chat: &'a ChatState) -> TextInputProps<'a> {
        TextInputProps {
            value: &chat.input,
            placeholder: "Type a message...",
            title: "Message",
            is_focused: true,
            on_change: Action::ChatInput,
            on_submit: Action::ChatSubmit,
        }
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ChatView {
    type Props<'a> = ChatViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.input.handle_event(event, Self::input_props(props.chat))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

        let mut lines: Vec<Line> = Vec::new();
        if props.chat.history().is_empty() && !props.chat.sending {
            lines.push(Line::from(Span::styled(
                "No messages yet. Say something below.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for message in props.chat.history() {
            lines.push(message_line(message));
        }
        if props.chat.sending {
            lines.push(Line::from(vec![
                Span::styled(
                    spinner_frame(props.tick_count),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" waiting for reply...", Style::default().fg(Color::Gray)),
            ]));
        }

        // Keep the newest messages visible.
        let visible = log_area.height.saturating_sub(2) as usize;
        if lines.len() > visible {
            lines.drain(..lines.len() - visible);
        }

        let log = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Conversation"),
        );
        frame.render_widget(log, log_area);

        self.input
            .render(frame, input_area, Self::input_props(props.chat));
    }
}

fn message_line(message: &Message) -> Line<'_> {
    let (label, style) = match message.role {
        Role::User => ("you", Style::default().fg(Color::Cyan).bold()),
        Role::Assistant => ("bot", Style::default().fg(Color::Green).bold()),
    };
    Line::from(vec![
        Span::styled(
            format!("{} ", message.timestamp.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}: ", label), style),
        Span::raw(message.text.as_str()),
    ])
}
