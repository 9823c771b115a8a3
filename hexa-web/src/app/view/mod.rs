mod handlers;

pub use handlers::AppHandlers;

use hexa_core::Character;
use yew::prelude::*;

use crate::app::state::{AppState, Screen};
use crate::components::character_creator::CharacterCreator;
use crate::components::character_list::CharacterList;
use crate::components::hexa_grid::HexaGrid;
use crate::components::priority_list::PriorityList;
use crate::components::transfer_drawer::TransferDrawer;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = match state.tracker.active_character() {
        Some(character) => render_character(character, &handlers),
        None if *state.screen == Screen::Creating => html! {
            <CharacterCreator
                on_create={handlers.create_character.clone()}
                on_cancel={handlers.cancel_create.clone()}
            />
        },
        None => {
            let characters: Vec<Character> = state
                .tracker
                .ordered_characters()
                .into_iter()
                .cloned()
                .collect();
            html! {
                <CharacterList
                    {characters}
                    on_select={handlers.select_character.clone()}
                    on_delete={handlers.delete_character.clone()}
                    on_move={handlers.move_character.clone()}
                    on_create={handlers.open_creator.clone()}
                />
            }
        }
    };

    html! {
        <div class="hexa-app">
            <header class="app-header">
                <h1>{ "HEXA Tracker" }</h1>
                <button class="data-open-btn" onclick={handlers.open_data.clone()}>{ "Data" }</button>
            </header>
            <main>{ main_view }</main>
            <TransferDrawer
                open={*state.show_data}
                title={AttrValue::from("Tracker data")}
                description={Some(AttrValue::from("Export every character as JSON, or import a backup to replace them."))}
                on_close={handlers.close_data.clone()}
                on_export={handlers.export_state.clone()}
                on_import={handlers.import_state.clone()}
            />
        </div>
    }
}

fn render_character(character: &Character, handlers: &AppHandlers) -> Html {
    html! {
        <div class="character-detail">
            <div class="character-detail__header">
                <button class="character-detail__back" onclick={handlers.back.clone()}>{ "← Characters" }</button>
                <h2>{ character.name.clone() }</h2>
                <span class="character-detail__meta">
                    { format!("{} · Lv. {}", character.job, character.level) }
                </span>
            </div>
            <HexaGrid
                job={AttrValue::from(character.job.clone())}
                progress={character.skill_progress.clone()}
                on_set_level={handlers.set_level.clone()}
            />
            <PriorityList
                key={character.id.clone()}
                character={character.clone()}
                on_update_sequence={handlers.update_sequence.clone()}
                on_reset_sequence={handlers.reset_sequence.clone()}
                on_complete_step={handlers.complete_step.clone()}
            />
        </div>
    }
}
