use hexa_core::TrackerState;
use yew::prelude::*;

use crate::storage;

/// Which top-level view is shown when no character is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Roster,
    Creating,
}

#[derive(Clone)]
pub struct AppState {
    pub tracker: UseStateHandle<TrackerState>,
    pub screen: UseStateHandle<Screen>,
    pub show_data: UseStateHandle<bool>,
}

impl AppState {
    /// Replace the tracker state with an edited copy.
    pub fn update(&self, edit: impl FnOnce(&mut TrackerState)) {
        let mut next = (*self.tracker).clone();
        edit(&mut next);
        self.tracker.set(next);
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        tracker: use_state(storage::load_or_default),
        screen: use_state(Screen::default),
        show_data: use_state(|| false),
    }
}

/// Write the tracker state back to storage whenever it changes.
#[hook]
pub fn use_persist_state(state: &AppState) {
    use_effect_with((*state.tracker).clone(), |tracker| {
        storage::persist(tracker);
        || ()
    });
}
