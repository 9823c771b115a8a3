use hexa_core::{Character, Sequence, complete_step};
use yew::prelude::*;

use crate::app::state::AppState;

/// Apply `edit` to the selected character, if any.
fn update_active(app: &AppState, edit: impl FnOnce(&Character) -> Character) {
    app.update(|tracker| {
        let Some(id) = tracker.active_character_id.clone() else {
            log::debug!("no active character to update");
            return;
        };
        if let Err(err) = tracker.update_character(&id, edit) {
            log::warn!("character update failed: {err}");
        }
    });
}

pub fn build_set_level(state: &AppState) -> Callback<(String, i64)> {
    let app = state.clone();
    Callback::from(move |(node_id, level): (String, i64)| {
        update_active(&app, |character| character.with_progress(&node_id, level));
    })
}

pub fn build_complete_step(state: &AppState) -> Callback<(String, u8)> {
    let app = state.clone();
    Callback::from(move |(node_id, target): (String, u8)| {
        update_active(&app, |character| Character {
            skill_progress: complete_step(&character.skill_progress, &node_id, target),
            ..character.clone()
        });
    })
}

pub fn build_update_sequence(state: &AppState) -> Callback<Sequence> {
    let app = state.clone();
    Callback::from(move |sequence: Sequence| {
        update_active(&app, |character| character.with_sequence(sequence));
    })
}

pub fn build_reset_sequence(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| update_active(&app, Character::without_custom_sequence))
}
