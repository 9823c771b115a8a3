//! `localStorage` backend for the tracker state.
use hexa_core::constants::STORAGE_KEY;
use hexa_core::{StateStorage, Tracker, TrackerState};
use thiserror::Error;
use web_sys::Storage;

use crate::dom;

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("local storage request failed: {0}")]
    Request(String),
    #[error("stored state is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Stores the whole tracker state as one JSON document under [`STORAGE_KEY`].
#[derive(Debug, Clone, Default)]
pub struct WebStorage;

impl WebStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn handle() -> Result<Storage, WebStorageError> {
        dom::local_storage()
            .map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl StateStorage for WebStorage {
    type Error = WebStorageError;

    fn load_state(&self) -> Result<Option<TrackerState>, Self::Error> {
        let raw = Self::handle()?
            .get_item(STORAGE_KEY)
            .map_err(|err| WebStorageError::Request(dom::js_error_message(&err)))?;
        raw.map(|text| decode_state(&text)).transpose()
    }

    fn save_state(&self, state: &TrackerState) -> Result<(), Self::Error> {
        let text = serde_json::to_string(state)?;
        Self::handle()?
            .set_item(STORAGE_KEY, &text)
            .map_err(|err| WebStorageError::Request(dom::js_error_message(&err)))
    }

    fn clear_state(&self) -> Result<(), Self::Error> {
        Self::handle()?
            .remove_item(STORAGE_KEY)
            .map_err(|err| WebStorageError::Request(dom::js_error_message(&err)))
    }
}

fn decode_state(text: &str) -> Result<TrackerState, WebStorageError> {
    Ok(serde_json::from_str(text)?)
}

/// The tracker engine over browser storage.
#[must_use]
pub const fn web_tracker() -> Tracker<WebStorage> {
    Tracker::new(WebStorage::new())
}

/// Load the stored state, falling back to a fresh one when storage fails.
#[must_use]
pub fn load_or_default() -> TrackerState {
    web_tracker().load().unwrap_or_else(|err| {
        log::error!("failed to load tracker state: {err}");
        TrackerState::default()
    })
}

/// Persist `state`, logging rather than surfacing failures.
pub fn persist(state: &TrackerState) {
    if let Err(err) = web_tracker().save(state) {
        log::error!("failed to save tracker state: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stored_envelope() {
        let state = decode_state(
            r#"{"version":2,"characters":{},"characterOrder":[],"activeCharacterId":null}"#,
        )
        .unwrap();
        assert!(state.is_current_version());
        assert!(state.characters.is_empty());
    }

    #[test]
    fn corrupt_storage_is_a_serialization_error() {
        let err = decode_state("{not json").unwrap_err();
        assert!(matches!(err, WebStorageError::Serialization(_)));
    }

    #[test]
    fn storage_without_browser_is_unavailable() {
        let err = WebStorage::new().load_state().unwrap_err();
        assert!(matches!(err, WebStorageError::Unavailable(_)));
        assert_eq!(load_or_default(), TrackerState::default());
    }
}
