use yew::prelude::*;

use crate::app::state::{AppState, Screen};
use crate::components::character_creator::NewCharacter;
use crate::dom;

pub fn build_open_creator(state: &AppState) -> Callback<()> {
    let screen = state.screen.clone();
    Callback::from(move |()| screen.set(Screen::Creating))
}

pub fn build_cancel_create(state: &AppState) -> Callback<()> {
    let screen = state.screen.clone();
    Callback::from(move |()| screen.set(Screen::Roster))
}

pub fn build_create_character(state: &AppState) -> Callback<NewCharacter> {
    let app = state.clone();
    Callback::from(move |new: NewCharacter| {
        let mut next = (*app.tracker).clone();
        match next.create_character(&new.name, &new.job, new.level) {
            Ok(_) => {
                app.tracker.set(next);
                app.screen.set(Screen::Roster);
            }
            Err(err) => {
                log::warn!("character creation rejected: {err}");
                dom::alert(&format!("Could not create character: {err}"));
            }
        }
    })
}

pub fn build_select_character(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |id: String| {
        app.update(|tracker| {
            if let Err(err) = tracker.select_character(&id) {
                log::warn!("select failed: {err}");
            }
        });
    })
}

pub fn build_delete_character(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |id: String| {
        let Some(name) = app.tracker.character(&id).map(|c| c.name.clone()) else {
            return;
        };
        if !dom::confirm(&format!("Delete {name}? This cannot be undone.")) {
            return;
        }
        app.update(|tracker| match tracker.delete_character(&id) {
            Ok(removed) => log::debug!("removed {} from the roster", removed.name),
            Err(err) => log::warn!("delete failed: {err}"),
        });
    })
}

pub fn build_move_character(state: &AppState) -> Callback<(usize, usize)> {
    let app = state.clone();
    Callback::from(move |(from, to): (usize, usize)| {
        app.update(|tracker| {
            if let Err(err) = tracker.move_character(from, to) {
                log::debug!("move ignored: {err}");
            }
        });
    })
}

pub fn build_back(state: &AppState) -> Callback<MouseEvent> {
    let app = state.clone();
    Callback::from(move |_| app.update(hexa_core::TrackerState::clear_selection))
}
