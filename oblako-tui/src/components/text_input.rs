//! Single-line text input with cursor.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use oblako_core::Action;

use super::Component;
use crate::event::EventKind;

pub struct TextInputProps<'a> {
    /// Current input value, owned by the store.
    pub value: &'a str,
    /// Shown dimmed while the value is empty.
    pub placeholder: &'a str,
    /// Border title.
    pub title: &'a str,
    pub is_focused: bool,
    /// Maps the edited value to an action.
    pub on_change: fn(String) -> Action,
    /// Emitted on Enter. The reducer reads the committed value from state.
    pub on_submit: Action,
}

/// Handles typing, backspace/delete, cursor movement and the usual readline
/// shortcuts (Ctrl+A/E/U). The cursor is a byte index into the value and is
/// kept on char boundaries.
#[derive(Default)]
pub struct TextInput {
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(&self, value: &str) -> usize {
        value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, value: &str) -> usize {
        value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut edited = String::with_capacity(value.len() + c.len_utf8());
        edited.push_str(&value[..self.cursor]);
        edited.push(c);
        edited.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        edited
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = self.prev_boundary(value);
        let edited = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(edited)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let end = self.next_boundary(value);
        Some(format!("{}{}", &value[..self.cursor], &value[end..]))
    }
}

impl Component for TextInput {
    type Props<'a> = TextInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let edited = self.insert_char(props.value, c);
                Some((props.on_change)(edited))
            }
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary(props.value);
                }
                None
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some(props.on_submit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(props.title),
        );
        frame.render_widget(paragraph, area);

        if props.is_focused {
            // Cursor column is in display cells, not bytes.
            let column = props.value[..self.cursor].chars().count() as u16;
            let x = area.x + 1 + column;
            if x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctrl_key, key};

    fn props<'a>(value: &'a str) -> TextInputProps<'a> {
        TextInputProps {
            value,
            placeholder: "Type here...",
            title: "Input",
            is_focused: true,
            on_change: Action::ChatInput,
            on_submit: Action::ChatSubmit,
        }
    }

    fn actions(input: &mut TextInput, event: EventKind, value: &str) -> Vec<Action> {
        input.handle_event(&event, props(value)).into_iter().collect()
    }

    #[test]
    fn test_typing_emits_change() {
        let mut input = TextInput::new();
        let got = actions(&mut input, EventKind::Key(key('a')), "");
        assert_eq!(got, vec![Action::ChatInput("a".into())]);
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let got = actions(&mut input, EventKind::Key(key('!')), "hello");
        assert_eq!(got, vec![Action::ChatInput("hello!".into())]);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = TextInput::new();
        input.cursor = "привет".len();
        let got = actions(&mut input, EventKind::Key(key_code(KeyCode::Backspace)), "привет");
        assert_eq!(got, vec![Action::ChatInput("приве".into())]);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        let got = actions(&mut input, EventKind::Key(key_code(KeyCode::Backspace)), "hello");
        assert!(got.is_empty());
    }

    #[test]
    fn test_enter_submits() {
        let mut input = TextInput::new();
        let got = actions(&mut input, EventKind::Key(key_code(KeyCode::Enter)), "hello");
        assert_eq!(got, vec![Action::ChatSubmit]);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let got = actions(&mut input, EventKind::Key(ctrl_key('u')), "hello");
        assert_eq!(got, vec![Action::ChatInput(String::new())]);
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut input = TextInput::new();
        let mut p = props("");
        p.is_focused = false;
        let got: Vec<Action> = input
            .handle_event(&EventKind::Key(key('a')), p)
            .into_iter()
            .collect();
        assert!(got.is_empty());
    }

    #[test]
    fn test_cursor_reclamped_after_external_clear() {
        // The value shrank underneath us (e.g. submit cleared the field).
        let mut input = TextInput::new();
        input.cursor = 10;
        let got = actions(&mut input, EventKind::Key(key('x')), "");
        assert_eq!(got, vec![Action::ChatInput("x".into())]);
    }

    fn key_code(code: KeyCode) -> crossterm::event::KeyEvent {
        crossterm::event::KeyEvent::new(code, KeyModifiers::empty())
    }
}
