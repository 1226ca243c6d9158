//! Event/action loop and effect execution.
//!
//! The runtime owns the [`Store`] and an unbounded action channel. Terminal
//! events are mapped into actions by the UI, actions run through the reducer,
//! and returned effects are spawned as tokio tasks whose completion actions
//! come back through the same channel. A tick subscription drives loading
//! spinners while a request is in flight.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use oblako_core::{
    Action, ApiClient, Effect, Store, WeatherQuery, WEATHER_CITY_ERROR, WEATHER_COORDS_ERROR,
};

use crate::app::AppUi;
use crate::event::{spawn_event_poller, EventKind};

/// How often the tick action fires, driving spinner animation.
pub const TICK_INTERVAL_MS: u64 = 120;

/// Configuration for the event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventOutcome {
    /// Actions to enqueue.
    pub actions: Vec<Action>,
    /// Whether to force a re-render.
    pub needs_render: bool,
}

impl EventOutcome {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// No actions, but request a render.
    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    /// Wrap a single action.
    pub fn action(action: Action) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Create from any iterator of actions.
    pub fn from_actions(iter: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }
}

impl From<Option<Action>> for EventOutcome {
    fn from(action: Option<Action>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

pub struct Runtime {
    store: Store,
    client: Arc<ApiClient>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    poller_config: PollerConfig,
    should_render: bool,
}

impl Runtime {
    pub fn new(store: Store, client: ApiClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store,
            client: Arc::new(client),
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
        }
    }

    /// Configure event polling behavior.
    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Access the current state.
    pub fn state(&self) -> &oblako_core::AppState {
        self.store.state()
    }

    /// Run the event/action loop until [`Action::Quit`].
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ui: &mut AppUi,
    ) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );
        let _ticker = spawn_tick_subscription(self.action_tx.clone(), cancel_token.clone());

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    ui.render(frame, frame.area(), state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    let outcome = ui.map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    for effect in result.effects {
                        self.handle_effect(effect);
                    }
                    if result.changed {
                        self.should_render = true;
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        Ok(())
    }

    /// Execute one effect as a detached task. Each completion sends exactly
    /// one action back; failures are logged here and surfaced to the state
    /// only as fixed user-facing text.
    fn handle_effect(&self, effect: Effect) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        match effect {
            Effect::SendChatMessage { text } => {
                tokio::spawn(async move {
                    let action = match client.send_chat_message(&text).await {
                        Ok(reply) => Action::ChatDidReply(reply.response),
                        Err(err) => {
                            warn!(error = %err, "chat request failed");
                            Action::ChatDidFail
                        }
                    };
                    let _ = tx.send(action);
                });
            }
            Effect::FetchWeather(query) => {
                tokio::spawn(async move {
                    let action = match &query {
                        WeatherQuery::Coordinates { lat, lon } => {
                            match client.weather_by_coords(*lat, *lon).await {
                                Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                                Err(err) => {
                                    warn!(error = %err, lat, lon, "coordinate lookup failed");
                                    Action::WeatherDidError(WEATHER_COORDS_ERROR.to_string())
                                }
                            }
                        }
                        WeatherQuery::City(city) => match client.weather_by_city(city).await {
                            Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                            Err(err) => {
                                warn!(error = %err, city = %city, "city lookup failed");
                                Action::WeatherDidError(WEATHER_CITY_ERROR.to_string())
                            }
                        },
                    };
                    let _ = tx.send(action);
                });
            }
            Effect::CheckHealth => {
                tokio::spawn(async move {
                    let action = match client.check_health().await {
                        Ok(_) => Action::HealthDidPass,
                        Err(err) => {
                            warn!(error = %err, "health check failed");
                            Action::HealthDidFail
                        }
                    };
                    let _ = tx.send(action);
                });
            }
        }
    }
}

fn spawn_tick_subscription(
    tx: mpsc::UnboundedSender<Action>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => break,
                _ = interval.tick() => {
                    if tx.send(Action::Tick).is_err() {
                        break;
                    }
                }
            }
        }
    })
}
