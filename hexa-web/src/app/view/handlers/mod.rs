mod character;
mod roster;
mod storage;

use hexa_core::Sequence;
use yew::prelude::*;

use crate::app::state::AppState;
use crate::components::character_creator::NewCharacter;

pub use character::{build_complete_step, build_reset_sequence, build_set_level, build_update_sequence};
pub use roster::{
    build_back, build_cancel_create, build_create_character, build_delete_character,
    build_move_character, build_open_creator, build_select_character,
};
pub use storage::{build_close_data, build_export_state, build_import_state, build_open_data};

#[derive(Clone)]
pub struct AppHandlers {
    pub open_creator: Callback<()>,
    pub create_character: Callback<NewCharacter>,
    pub cancel_create: Callback<()>,
    pub select_character: Callback<String>,
    pub delete_character: Callback<String>,
    pub move_character: Callback<(usize, usize)>,
    pub back: Callback<MouseEvent>,
    pub set_level: Callback<(String, i64)>,
    pub complete_step: Callback<(String, u8)>,
    pub update_sequence: Callback<Sequence>,
    pub reset_sequence: Callback<()>,
    pub open_data: Callback<MouseEvent>,
    pub close_data: Callback<()>,
    pub export_state: Callback<()>,
    pub import_state: Callback<String>,
}

impl AppHandlers {
    pub fn new(state: &AppState) -> Self {
        Self {
            open_creator: build_open_creator(state),
            create_character: build_create_character(state),
            cancel_create: build_cancel_create(state),
            select_character: build_select_character(state),
            delete_character: build_delete_character(state),
            move_character: build_move_character(state),
            back: build_back(state),
            set_level: build_set_level(state),
            complete_step: build_complete_step(state),
            update_sequence: build_update_sequence(state),
            reset_sequence: build_reset_sequence(state),
            open_data: build_open_data(state),
            close_data: build_close_data(state),
            export_state: build_export_state(state),
            import_state: build_import_state(state),
        }
    }
}
