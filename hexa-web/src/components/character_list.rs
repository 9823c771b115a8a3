use hexa_core::{Character, completion_summary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Characters in display order.
    pub characters: Vec<Character>,
    pub on_select: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_move: Callback<(usize, usize)>,
    pub on_create: Callback<()>,
}

#[function_component(CharacterList)]
pub fn character_list(p: &Props) -> Html {
    let create = {
        let cb = p.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let last = p.characters.len().saturating_sub(1);

    html! {
        <section class="character-list">
            <div class="character-list__header">
                <h2>{ "Characters" }</h2>
                <button class="character-list__create" onclick={create}>{ "+ New Character" }</button>
            </div>
            if p.characters.is_empty() {
                <p class="character-list__empty">{ "No characters yet. Create one to start tracking." }</p>
            } else {
                <ul class="character-list__items">
                    { for p.characters.iter().enumerate().map(|(idx, character)| character_card(p, idx, last, character)) }
                </ul>
            }
        </section>
    }
}

fn character_card(p: &Props, idx: usize, last: usize, character: &Character) -> Html {
    let summary = completion_summary(
        &character.job,
        &character.active_sequence(),
        &character.skill_progress,
    );
    let select = {
        let cb = p.on_select.clone();
        let id = character.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let delete = {
        let cb = p.on_delete.clone();
        let id = character.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    let move_up = {
        let cb = p.on_move.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit((idx, idx.saturating_sub(1)));
        })
    };
    let move_down = {
        let cb = p.on_move.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit((idx, idx + 1));
        })
    };

    html! {
        <li key={character.id.clone()} class="character-card" onclick={select}>
            <div class="character-card__info">
                <span class="character-card__name">{ character.name.clone() }</span>
                <span class="character-card__job">{ character.job.clone() }</span>
                <span class="character-card__level">{ format!("Lv. {}", character.level) }</span>
                <span class="character-card__progress">
                    { format!("{}/{} steps done", summary.done, summary.total) }
                </span>
            </div>
            <div class="character-card__actions">
                <button aria-label="Move up" disabled={idx == 0} onclick={move_up}>{ "↑" }</button>
                <button aria-label="Move down" disabled={idx == last} onclick={move_down}>{ "↓" }</button>
                <button class="character-card__delete" aria-label="Delete" onclick={delete}>{ "🗑" }</button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(characters: Vec<Character>) -> Props {
        Props {
            characters,
            on_select: Callback::noop(),
            on_delete: Callback::noop(),
            on_move: Callback::noop(),
            on_create: Callback::noop(),
        }
    }

    #[test]
    fn empty_roster_prompts_for_creation() {
        let html = block_on(LocalServerRenderer::<CharacterList>::with_props(props(Vec::new())).render());
        assert!(html.contains("No characters yet"));
        assert!(html.contains("character-list__create"));
    }

    #[test]
    fn cards_show_job_level_and_progress() {
        let hero = Character::new("char-1", "Aran", "Hero", 285).with_progress("origin", 1);
        let html = block_on(LocalServerRenderer::<CharacterList>::with_props(props(vec![hero])).render());
        assert!(html.contains("Aran"));
        assert!(html.contains("Hero"));
        assert!(html.contains("Lv. 285"));
        assert!(html.contains("steps done"));
    }
}
