//! One-line view switcher across the top of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use oblako_core::ViewId;

use super::Component;

pub struct TabBar;

pub struct TabBarProps {
    pub active: ViewId,
}

impl Component for TabBar {
    type Props<'a> = TabBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = vec![Span::raw(" ")];
        for view in ViewId::ALL {
            let style = if view == props.active {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", view.title()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
