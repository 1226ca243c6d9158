//! Key hints along the bottom line, specific to the active view.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use oblako_core::ViewId;

use super::Component;

pub struct HelpBar;

pub struct HelpBarProps {
    pub view: ViewId,
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut hints: Vec<(&str, &str)> = vec![("tab", "views")];
        match props.view {
            ViewId::Chat => hints.push(("enter", "send")),
            ViewId::Weather => hints.push(("enter", "search")),
            ViewId::Status => {
                hints.push(("r", "re-check"));
                hints.push(("q", "quit"));
            }
        }
        hints.push(("ctrl+c", "quit"));

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (keys, label) in hints {
            spans.push(Span::styled(
                format!(" {}", keys),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {}  ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;

    #[test]
    fn test_hints_follow_view() {
        let mut harness = RenderHarness::new(60, 1);

        let output = harness.render_to_string(|frame| {
            HelpBar.render(frame, frame.area(), HelpBarProps { view: ViewId::Chat });
        });
        assert!(output.contains("send"));

        let output = harness.render_to_string(|frame| {
            HelpBar.render(frame, frame.area(), HelpBarProps { view: ViewId::Status });
        });
        assert!(output.contains("re-check"));
    }
}
