use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub on_close: Callback<()>,
    pub on_export: Callback<()>,
    pub on_import: Callback<String>,
}

/// Drawer with an export button and a paste-in import box.
#[function_component(TransferDrawer)]
pub fn transfer_drawer(p: &Props) -> Html {
    let import_text = use_state(|| AttrValue::from(""));
    let on_input = {
        let st = import_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                st.set(input.value().into());
            }
        })
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_btn = {
        let cb = p.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let import_btn = {
        let cb = p.on_import.clone();
        let val = import_text.clone();
        Callback::from(move |_| {
            cb.emit((*val).to_string());
            val.set(AttrValue::from(""));
        })
    };
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                cb.emit(());
            }
        })
    };

    if !p.open {
        return html! {};
    }

    let import_disabled = import_text.trim().is_empty();
    html! {
        <div class="drawer" role="dialog" aria-modal="true" aria-label={p.title.clone()} onkeydown={on_keydown}>
            <div class="drawer__header">
                <h2>{ p.title.clone() }</h2>
                <button class="drawer__close" aria-label="Close" onclick={close}>{ "✕" }</button>
            </div>
            if let Some(description) = p.description.clone() {
                <p class="drawer__description">{ description }</p>
            }
            <div class="drawer__body">
                <button class="drawer__export" onclick={export_btn}>{ "Export" }</button>
                <label for="transfer-import">{ "Paste exported JSON to import" }</label>
                <textarea id="transfer-import" rows="8" value={(*import_text).clone()} oninput={on_input} />
                <button class="drawer__import" disabled={import_disabled} onclick={import_btn}>{ "Import" }</button>
            </div>
        </div>
    }
}
