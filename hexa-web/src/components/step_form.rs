use hexa_core::{StepForm, ceiling_for, job_nodes};
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub job: AttrValue,
    pub form: StepForm,
    /// Label of the confirm button: "Add" for inserts, "Save" for edits.
    pub confirm_label: AttrValue,
    pub on_select_node: Callback<String>,
    pub on_level_input: Callback<String>,
    pub on_level_blur: Callback<()>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Inline node + level form for inserting or editing a step.
#[function_component(StepFormView)]
pub fn step_form_view(p: &Props) -> Html {
    let on_node = {
        let cb = p.on_select_node.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };
    let on_level = {
        let cb = p.on_level_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_blur = {
        let cb = p.on_level_blur.clone();
        Callback::from(move |_: FocusEvent| cb.emit(()))
    };
    let on_keydown = {
        let submit = p.on_submit.clone();
        let cancel = p.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                submit.emit(());
            }
            "Escape" => cancel.emit(()),
            _ => {}
        })
    };
    let submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let ceiling = ceiling_for(&p.form.node_id);
    let selected = p.form.node_id.clone();

    html! {
        <li class="step-form" onkeydown={on_keydown}>
            <select class="step-form__node" aria-label="Node" onchange={on_node}>
                { for job_nodes(&p.job).into_iter().map(|node| html! {
                    <option value={node.id.clone()} selected={node.id == selected}>
                        { node.display_name.clone() }
                    </option>
                }) }
            </select>
            <input
                class="step-form__level"
                type="number"
                aria-label="Target level"
                min="1"
                max={ceiling.to_string()}
                value={p.form.level_text.clone()}
                oninput={on_level}
                onblur={on_blur}
            />
            <button class="step-form__submit" onclick={submit}>{ p.confirm_label.clone() }</button>
            <button class="step-form__cancel" onclick={cancel}>{ "Cancel" }</button>
            if let Some(error) = p.form.error.as_ref() {
                <p class="step-form__error" role="alert">{ error.to_string() }</p>
            }
        </li>
    }
}
