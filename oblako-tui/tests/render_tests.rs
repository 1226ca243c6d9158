//! Full-screen render tests: one store state in, buffer text out.

use oblako_core::{
    AppState, CurrentConditions, HealthState, HealthStatus, LocationInfo, RequestState, Role,
    ViewId, WeatherSnapshot,
};
use oblako_tui::testing::RenderHarness;
use oblako_tui::AppUi;

const BASE_URL: &str = "http://127.0.0.1:8000/api";

fn render(state: &AppState) -> String {
    let mut harness = RenderHarness::new(80, 24);
    let mut ui = AppUi::new(BASE_URL);
    harness.render_to_string(|frame| {
        ui.render(frame, frame.area(), state);
    })
}

#[test]
fn test_render_initial_chat_view() {
    let state = AppState::default();
    let output = render(&state);

    // Tab bar lists every view; chat is active by default.
    assert!(output.contains("Chat"), "should show chat tab");
    assert!(output.contains("Weather"), "should show weather tab");
    assert!(output.contains("Status"), "should show status tab");
    assert!(output.contains("No messages yet"), "should prompt for input");
    assert!(output.contains("send"), "should show send hint");
}

#[test]
fn test_render_conversation_history() {
    let mut state = AppState::default();
    state.chat.push(Role::User, "какая погода?");
    state.chat.push(Role::Assistant, "сейчас посмотрю");

    let output = render(&state);
    assert!(output.contains("you: какая погода?"));
    assert!(output.contains("bot: сейчас посмотрю"));
}

#[test]
fn test_render_chat_sending_spinner() {
    let mut state = AppState::default();
    state.chat.push(Role::User, "ping");
    state.chat.sending = true;

    let output = render(&state);
    assert!(output.contains("waiting for reply"), "should show spinner line");
}

#[test]
fn test_render_weather_idle_hints() {
    let state = AppState {
        view: ViewId::Weather,
        ..Default::default()
    };

    let output = render(&state);
    assert!(output.contains("Москва"), "should show city example");
    assert!(output.contains("55.7558, 37.6173"), "should show coords example");
    assert!(output.contains("search"), "should show search hint");
}

#[test]
fn test_render_weather_snapshot() {
    let mut state = AppState {
        view: ViewId::Weather,
        ..Default::default()
    };
    state.weather.request = RequestState::Success(WeatherSnapshot {
        location: LocationInfo {
            name: "Санкт-Петербург".into(),
        },
        current: CurrentConditions {
            temp: 14.2,
            feels_like: 12.9,
            humidity: 81,
            pressure: 1003,
            weather: "Пасмурно".into(),
            icon: "04d".into(),
            wind_speed: 5.4,
        },
        daily: vec![],
    });

    let output = render(&state);
    assert!(output.contains("Санкт-Петербург"), "should show location");
    assert!(output.contains("14°C"), "should show temperature");
    assert!(output.contains("81%"), "should show humidity");
    assert!(output.contains("1003 hPa"), "should show pressure");
}

#[test]
fn test_render_weather_error() {
    let mut state = AppState {
        view: ViewId::Weather,
        ..Default::default()
    };
    state.weather.request =
        RequestState::Error("City lookup failed. Check the name and try again.".into());

    let output = render(&state);
    assert!(output.contains("Error"), "should show error label");
    assert!(output.contains("City lookup failed"), "should show generic text");
}

#[test]
fn test_render_status_states() {
    for (status, expected) in [
        (HealthStatus::Checking, "checking"),
        (HealthStatus::Healthy, "online"),
        (HealthStatus::Error, "unreachable"),
    ] {
        let state = AppState {
            view: ViewId::Status,
            health: HealthState {
                status,
                probed: true,
            },
            ..Default::default()
        };

        let output = render(&state);
        assert!(output.contains(BASE_URL), "should show backend address");
        assert!(output.contains(expected), "should show {:?}", status);
        assert!(output.contains("re-check"), "should show re-check hint");
    }
}
