use hexa_core::constants::STATE_EXPORT_FILE_NAME;
use hexa_core::{ImportOutcome, export_state, import_state};
use yew::prelude::*;

use crate::app::state::{AppState, Screen};
use crate::dom;

pub fn build_open_data(state: &AppState) -> Callback<MouseEvent> {
    let show = state.show_data.clone();
    Callback::from(move |_| show.set(true))
}

pub fn build_close_data(state: &AppState) -> Callback<()> {
    let show = state.show_data.clone();
    Callback::from(move |()| show.set(false))
}

pub fn build_export_state(state: &AppState) -> Callback<()> {
    let tracker = state.tracker.clone();
    Callback::from(move |()| match export_state(&tracker) {
        Ok(text) => {
            dom::copy_to_clipboard(&text);
            if let Err(err) = dom::download_json(STATE_EXPORT_FILE_NAME, &text) {
                log::error!("data download failed: {}", dom::js_error_message(&err));
            }
        }
        Err(err) => {
            log::error!("data export failed: {err}");
            dom::alert(&format!("Export failed: {err}"));
        }
    })
}

pub fn build_import_state(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |raw: String| {
        let outcome = import_state(&raw, || {
            dom::confirm("Importing replaces every character you have saved. Continue?")
        });
        match outcome {
            Ok(ImportOutcome::Applied(imported)) => {
                log::info!("imported {} characters", imported.characters.len());
                app.tracker.set(imported);
                app.screen.set(Screen::Roster);
                app.show_data.set(false);
            }
            Ok(ImportOutcome::Declined) => {}
            Err(err) => {
                log::warn!("data import rejected: {err}");
                dom::alert(&format!("Failed to import data: {err}"));
            }
        }
    })
}
