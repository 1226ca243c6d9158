//! Centralized state store.
//!
//! A thin wrapper over [`reducer`] that owns the state and logs every
//! dispatch, the single point all mutations go through.

use tracing::debug;

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::reducer::reducer;
use crate::state::AppState;

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run an action through the reducer, returning the state-change flag
    /// and any effects for the runtime to execute.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let result = reducer(&mut self.state, action);
        debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;

    #[test]
    fn test_dispatch_runs_reducer_and_returns_effects() {
        let mut store = Store::new(AppState::default());
        assert!(store.state().chat.history().is_empty());

        store.dispatch(Action::ChatInput("hi".into()));
        let result = store.dispatch(Action::ChatSubmit);

        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::SendChatMessage { text: "hi".into() }]
        );
        assert_eq!(store.state().chat.history().len(), 1);
    }
}
