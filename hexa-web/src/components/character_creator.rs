use hexa_core::JOBS;
use hexa_core::constants::{DEFAULT_CHARACTER_LEVEL, MAX_CHARACTER_LEVEL, MIN_CHARACTER_LEVEL};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Values collected by the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub job: String,
    pub level: u16,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_create: Callback<NewCharacter>,
    pub on_cancel: Callback<()>,
}

/// Parse the level field, falling back to the default and clamping to the allowed range.
#[must_use]
pub fn parse_character_level(text: &str) -> u16 {
    text.trim()
        .parse::<u16>()
        .unwrap_or(DEFAULT_CHARACTER_LEVEL)
        .clamp(MIN_CHARACTER_LEVEL, MAX_CHARACTER_LEVEL)
}

#[function_component(CharacterCreator)]
pub fn character_creator(p: &Props) -> Html {
    let name = use_state(String::new);
    let job = use_state(|| JOBS.first().map(|job| (*job).to_string()).unwrap_or_default());
    let level = use_state(|| DEFAULT_CHARACTER_LEVEL.to_string());

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let on_job = {
        let job = job.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                job.set(select.value());
            }
        })
    };
    let on_level = {
        let level = level.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                level.set(input.value());
            }
        })
    };
    let on_submit = {
        let cb = p.on_create.clone();
        let name = name.clone();
        let job = job.clone();
        let level = level.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() {
                return;
            }
            cb.emit(NewCharacter {
                name: name.trim().to_string(),
                job: (*job).clone(),
                level: parse_character_level(&level),
            });
        })
    };
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <form class="character-creator" onsubmit={on_submit}>
            <h2>{ "New Character" }</h2>
            <label for="character-name">{ "Name" }</label>
            <input id="character-name" type="text" value={(*name).clone()} oninput={on_name} />
            <label for="character-job">{ "Job" }</label>
            <select id="character-job" onchange={on_job}>
                { for JOBS.iter().map(|option| html! {
                    <option value={*option} selected={*option == job.as_str()}>{ *option }</option>
                }) }
            </select>
            <label for="character-level">{ "Level" }</label>
            <input
                id="character-level"
                type="number"
                min={MIN_CHARACTER_LEVEL.to_string()}
                max={MAX_CHARACTER_LEVEL.to_string()}
                value={(*level).clone()}
                oninput={on_level}
            />
            <div class="character-creator__actions">
                <button type="submit" disabled={name.trim().is_empty()}>{ "Create" }</button>
                <button type="button" onclick={cancel}>{ "Cancel" }</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn level_field_is_clamped_and_defaulted() {
        assert_eq!(parse_character_level("275"), 275);
        assert_eq!(parse_character_level("999"), MAX_CHARACTER_LEVEL);
        assert_eq!(parse_character_level("12"), MIN_CHARACTER_LEVEL);
        assert_eq!(parse_character_level("abc"), DEFAULT_CHARACTER_LEVEL);
    }

    #[test]
    fn form_lists_every_job() {
        let props = Props {
            on_create: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CharacterCreator>::with_props(props).render());
        assert!(html.contains("character-name"));
        for job in JOBS.iter() {
            assert!(html.contains(job), "{job} missing");
        }
    }
}
