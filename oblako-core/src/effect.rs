//! Effects - side effects declared by the reducer.
//!
//! Effects are descriptions of work, not the work itself. The reducer stays
//! pure; the runtime turns each effect into a tokio task that runs to
//! completion and reports back as an action. No effect is ever cancelled.

use crate::query::WeatherQuery;

/// Side effects the reducer can request.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Send a conversation message to the backend.
    SendChatMessage { text: String },
    /// Run a weather lookup for an already-classified query.
    FetchWeather(WeatherQuery),
    /// Probe the backend health endpoint.
    CheckHealth,
}

/// Generic text shown when a coordinate lookup fails. Raw detail goes to the
/// log only.
pub const WEATHER_COORDS_ERROR: &str = "Could not fetch weather for those coordinates.";

/// Generic text shown when a name lookup fails.
pub const WEATHER_CITY_ERROR: &str = "City lookup failed. Check the name and try again.";

/// Result of dispatching one action: whether state changed (re-render
/// needed) plus any effects to execute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change, no effects.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    /// State changed with a single effect.
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Force the changed flag on.
    pub fn mark_changed(mut self) -> Self {
        self.changed = true;
        self
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let r = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(!r.has_effects());

        let r = DispatchResult::changed();
        assert!(r.changed);
        assert!(r.effects.is_empty());

        let r = DispatchResult::changed_with(Effect::CheckHealth);
        assert!(r.changed);
        assert_eq!(r.effects, vec![Effect::CheckHealth]);

        let r = DispatchResult::unchanged()
            .with(Effect::CheckHealth)
            .mark_changed();
        assert!(r.changed);
        assert!(r.has_effects());
    }
}
