//! Weather view: a search field above the current conditions.
//!
//! The body follows the request lifecycle: hints while idle, a spinner while
//! loading, the generic error text on failure, and the full snapshot with a
//! forecast strip on success.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use oblako_core::{icon_glyph, Action, RequestState, WeatherSnapshot, WeatherState};

use super::{spinner_frame, Component, TextInput, TextInputProps};
use crate::event::EventKind;

/// How many forecast days the strip shows at most.
const FORECAST_DAYS: usize = 5;

pub struct WeatherView {
    input: TextInput,
}

pub struct WeatherViewProps<'a> {
    pub weather: &'a WeatherState,
    pub tick_count: u32,
}

impl WeatherView {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
        }
    }

    fn input_props<'a>(weather: &'a WeatherState) -> TextInputProps<'a> {
        TextInputProps {
            value: &weather.input,
            placeholder: "City name or lat, lon",
            title: "Search",
            is_focused: true,
            on_change: Action::WeatherInput,
            on_submit: Action::WeatherSubmit,
        }
    }
}

impl Default for WeatherView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for WeatherView {
    type Props<'a> = WeatherViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.input
            .handle_event(event, Self::input_props(props.weather))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [input_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        self.input
            .render(frame, input_area, Self::input_props(props.weather));

        let lines = match &props.weather.request {
            RequestState::Idle => idle_lines(),
            RequestState::Loading => loading_lines(props.tick_count),
            RequestState::Error(message) => error_lines(message),
            RequestState::Success(snapshot) => snapshot_lines(snapshot),
        };

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, body_area);
    }
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(dim("Search by city name or coordinates:")),
        Line::from(""),
        Line::from(vec![dim("city    "), Span::raw("Москва")]),
        Line::from(vec![dim("coords  "), Span::raw("55.7558, 37.6173")]),
    ]
}

fn loading_lines(tick_count: u32) -> Vec<Line<'static>> {
    let dots = ".".repeat((tick_count as usize / 3) % 4);
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(tick_count), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" Fetching weather{:<3}", dots),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ]
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        )),
        Line::from(""),
        Line::from(dim("Press enter to retry")),
    ]
}

fn snapshot_lines(snapshot: &WeatherSnapshot) -> Vec<Line<'static>> {
    let current = &snapshot.current;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.location.name.clone(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{:.0}°C ", current.temp),
                Style::default().fg(temp_color(current.temp)).bold(),
            ),
            Span::raw(format!("{} {}", icon_glyph(&current.icon), current.weather)),
        ]),
        Line::from(dim(format!("feels like {:.0}°C", current.feels_like))),
        Line::from(""),
        Line::from(vec![
            dim("humidity "),
            Span::raw(format!("{}%", current.humidity)),
            dim("   pressure "),
            Span::raw(format!("{} hPa", current.pressure)),
            dim("   wind "),
            Span::raw(format!("{:.1} m/s", current.wind_speed)),
        ]),
    ];

    if !snapshot.daily.is_empty() {
        lines.push(Line::from(""));
        let mut strip = Vec::new();
        for day in snapshot.daily.iter().take(FORECAST_DAYS) {
            let label = day
                .date()
                .map(|d| d.format("%a").to_string())
                .unwrap_or_else(|| "?".to_string());
            strip.push(dim(format!("{} ", label)));
            strip.push(Span::raw(format!(
                "{} {:.0}°  ",
                icon_glyph(&day.icon),
                day.temp
            )));
        }
        lines.push(Line::from(strip));
    }

    lines
}

fn temp_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        _ => Color::Rgb(255, 150, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{key_code, RenderHarness};
    use crossterm::event::KeyCode;
    use oblako_core::{CurrentConditions, DailyForecast, LocationInfo};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: LocationInfo {
                name: "Москва".into(),
            },
            current: CurrentConditions {
                temp: 21.4,
                feels_like: 20.8,
                humidity: 56,
                pressure: 1012,
                weather: "Ясно".into(),
                icon: "01d".into(),
                wind_speed: 3.2,
            },
            daily: vec![DailyForecast {
                dt: 1756468800,
                temp: 22.0,
                weather: "Облачно".into(),
                icon: "03d".into(),
            }],
        }
    }

    fn render(weather: &WeatherState) -> String {
        let mut harness = RenderHarness::new(60, 16);
        let mut view = WeatherView::new();
        harness.render_to_string(|frame| {
            view.render(
                frame,
                frame.area(),
                WeatherViewProps { weather, tick_count: 0 },
            );
        })
    }

    #[test]
    fn test_enter_submits_search() {
        let mut view = WeatherView::new();
        let weather = WeatherState::default();
        let got: Vec<Action> = view
            .handle_event(
                &EventKind::Key(key_code(KeyCode::Enter)),
                WeatherViewProps { weather: &weather, tick_count: 0 },
            )
            .into_iter()
            .collect();
        assert_eq!(got, vec![Action::WeatherSubmit]);
    }

    #[test]
    fn test_idle_shows_search_hints() {
        let output = render(&WeatherState::default());
        assert!(output.contains("Москва"));
        assert!(output.contains("55.7558, 37.6173"));
    }

    #[test]
    fn test_loading_shows_spinner() {
        let weather = WeatherState {
            request: RequestState::Loading,
            ..Default::default()
        };
        assert!(render(&weather).contains("Fetching weather"));
    }

    #[test]
    fn test_error_shows_message() {
        let weather = WeatherState {
            request: RequestState::Error("City lookup failed.".into()),
            ..Default::default()
        };
        let output = render(&weather);
        assert!(output.contains("Error"));
        assert!(output.contains("City lookup failed."));
    }

    #[test]
    fn test_snapshot_shows_conditions_and_forecast() {
        let weather = WeatherState {
            request: RequestState::Success(snapshot()),
            ..Default::default()
        };
        let output = render(&weather);
        assert!(output.contains("Москва"));
        assert!(output.contains("21°C"));
        assert!(output.contains("feels like 21°C"));
        assert!(output.contains("56%"));
        assert!(output.contains("1012 hPa"));
        assert!(output.contains("3.2 m/s"));
        assert!(output.contains("22°"));
    }
}
