//! JSON import and export for single sequences and for the whole tracker state.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::TrackerState;
use crate::constants::{SEQUENCE_EXPORT_SUFFIX, STATE_VERSION};
use crate::sequence::Sequence;

static NON_SLUG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").ok());

/// Transport shape for a shared sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceExport {
    pub job: String,
    pub sequence: Sequence,
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("could not read sequence file: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("cannot import sequence: job mismatch (expected {expected}, found {found})")]
    JobMismatch { expected: String, found: String },
    #[error("could not serialize: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StateImportError {
    #[error("invalid data format")]
    InvalidFormat,
    #[error("could not read data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of an import the user may decline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome<T> {
    Applied(T),
    Declined,
}

impl<T> ImportOutcome<T> {
    #[must_use]
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Declined => None,
        }
    }
}

/// Pretty JSON for sharing `sequence` as `job`'s plan.
///
/// # Errors
///
/// Returns [`TransferError::Serialize`] if encoding fails.
pub fn export_sequence(job: &str, sequence: &Sequence) -> Result<String, TransferError> {
    let payload = SequenceExport {
        job: job.to_string(),
        sequence: sequence.clone(),
    };
    serde_json::to_string_pretty(&payload).map_err(TransferError::Serialize)
}

/// Download name for a sequence export, e.g. `night-lord-hexa-sequence.json`.
#[must_use]
pub fn sequence_file_name(job: &str) -> String {
    let lowered = job.to_lowercase();
    let slug = NON_SLUG
        .as_ref()
        .map_or_else(|| lowered.clone(), |re| re.replace_all(&lowered, "-").into_owned());
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        SEQUENCE_EXPORT_SUFFIX.to_string()
    } else {
        format!("{slug}-{SEQUENCE_EXPORT_SUFFIX}")
    }
}

/// Parse a shared sequence without applying it.
///
/// # Errors
///
/// Returns [`TransferError::Parse`] for malformed input.
pub fn parse_sequence_export(raw: &str) -> Result<SequenceExport, TransferError> {
    serde_json::from_str(raw).map_err(TransferError::Parse)
}

/// Import a shared sequence for `current_job`.
///
/// The job must match. When the character already has a custom sequence,
/// `confirm_overwrite` is asked first and a refusal yields
/// [`ImportOutcome::Declined`]. Steps are taken as-is without level checks.
///
/// # Errors
///
/// Returns [`TransferError::Parse`] or [`TransferError::JobMismatch`]; the
/// caller's sequence is untouched in either case.
pub fn import_sequence<F>(
    raw: &str,
    current_job: &str,
    is_custom: bool,
    confirm_overwrite: F,
) -> Result<ImportOutcome<Sequence>, TransferError>
where
    F: FnOnce() -> bool,
{
    let parsed = parse_sequence_export(raw)?;
    if parsed.job != current_job {
        log::warn!(
            "sequence import refused: file is for {}, character is {current_job}",
            parsed.job
        );
        return Err(TransferError::JobMismatch {
            expected: current_job.to_string(),
            found: parsed.job,
        });
    }
    if is_custom && !confirm_overwrite() {
        log::info!("sequence import declined by user");
        return Ok(ImportOutcome::Declined);
    }
    log::info!(
        "imported {} steps for {current_job} without re-validation",
        parsed.sequence.len()
    );
    Ok(ImportOutcome::Applied(parsed.sequence))
}

/// Pretty JSON of the whole tracker state.
///
/// # Errors
///
/// Returns [`TransferError::Serialize`] if encoding fails.
pub fn export_state(state: &TrackerState) -> Result<String, TransferError> {
    serde_json::to_string_pretty(state).map_err(TransferError::Serialize)
}

/// Import a whole-state backup.
///
/// The payload must be a JSON object with a `characters` key. The caller is
/// asked to confirm before anything is replaced. Accepted states are stamped
/// with the current schema version.
///
/// # Errors
///
/// Returns [`StateImportError::Parse`] for malformed JSON or entries, and
/// [`StateImportError::InvalidFormat`] when `characters` is missing or null.
pub fn import_state<F>(
    raw: &str,
    confirm_overwrite: F,
) -> Result<ImportOutcome<TrackerState>, StateImportError>
where
    F: FnOnce() -> bool,
{
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.get("characters").is_some_and(|v| !v.is_null()) {
        return Err(StateImportError::InvalidFormat);
    }
    let mut state: TrackerState = serde_json::from_value(value)?;
    if !confirm_overwrite() {
        log::info!("state import declined by user");
        return Ok(ImportOutcome::Declined);
    }
    if state.version != STATE_VERSION {
        log::info!(
            "imported state version {} stamped as {STATE_VERSION}",
            state.version
        );
        state.version = STATE_VERSION;
    }
    log::info!("imported {} characters", state.characters.len());
    Ok(ImportOutcome::Applied(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn export_uses_transport_shape() {
        let raw = export_sequence("Hero", &Sequence::from_pairs(&[("origin", 2)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "job": "Hero",
                "sequence": [{ "nodeId": "origin", "targetLevel": 2 }]
            })
        );
    }

    #[test]
    fn file_names_slug_the_job() {
        assert_eq!(sequence_file_name("Hero"), "hero-hexa-sequence.json");
        assert_eq!(
            sequence_file_name("Arch Mage (Fire/Poison)"),
            "arch-mage-fire-poison-hexa-sequence.json"
        );
        assert_eq!(sequence_file_name("???"), "hexa-sequence.json");
    }

    #[test]
    fn matching_job_without_custom_applies_silently() {
        let raw = export_sequence("Hero", &Sequence::from_pairs(&[("m1", 3)])).unwrap();
        let asked = Cell::new(false);
        let outcome = import_sequence(&raw, "Hero", false, || {
            asked.set(true);
            true
        })
        .unwrap();
        assert_eq!(outcome, ImportOutcome::Applied(Sequence::from_pairs(&[("m1", 3)])));
        assert!(!asked.get());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = import_sequence("{ not json", "Hero", false, || true).unwrap_err();
        assert!(matches!(err, TransferError::Parse(_)));
        let err = import_sequence(r#"{"job":"Hero"}"#, "Hero", false, || true).unwrap_err();
        assert!(matches!(err, TransferError::Parse(_)));
    }

    #[test]
    fn imports_are_not_revalidated() {
        let raw = r#"{"job":"Hero","sequence":[
            {"nodeId":"origin","targetLevel":10},
            {"nodeId":"origin","targetLevel":5}
        ]}"#;
        let seq = import_sequence(raw, "Hero", false, || true)
            .unwrap()
            .applied()
            .unwrap();
        assert!(!seq.is_monotonic());
    }

    #[test]
    fn state_import_requires_characters_key() {
        let err = import_state(r#"{"version":2}"#, || true).unwrap_err();
        assert!(matches!(err, StateImportError::InvalidFormat));
        assert_eq!(err.to_string(), "invalid data format");
        let err = import_state("[]", || true).unwrap_err();
        assert!(matches!(err, StateImportError::InvalidFormat));
        let err = import_state(r#"{"version":2,"characters":null}"#, || true).unwrap_err();
        assert!(matches!(err, StateImportError::InvalidFormat));
        assert!(matches!(
            import_state("nope", || true),
            Err(StateImportError::Parse(_))
        ));
    }

    #[test]
    fn state_import_can_be_declined() {
        let raw = r#"{"characters":{}}"#;
        assert_eq!(import_state(raw, || false).unwrap(), ImportOutcome::Declined);
    }

    #[test]
    fn state_roundtrip_through_export_and_import() {
        let mut state = TrackerState::default();
        let id = state.create_character("Aria", "Hero", 270).unwrap();
        state
            .update_character(&id, |ch| ch.with_progress("origin", 7))
            .unwrap();
        let raw = export_state(&state).unwrap();
        let back = import_state(&raw, || true).unwrap().applied().unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn state_import_stamps_current_version() {
        let raw = r#"{"version":1,"characters":{"c1":{"id":"c1","name":"Old","job":"Bishop","level":270}}}"#;
        let state = import_state(raw, || true).unwrap().applied().unwrap();
        assert_eq!(state.version, STATE_VERSION);
        assert!(state.character("c1").unwrap().skill_progress.is_empty());
    }
}
