//! Hexa Tracker Core
//!
//! Platform-agnostic logic for planning HEXA matrix upgrades: the node
//! catalog, per-job data, priority sequences and their level validator, the
//! sequence editor state machine, import/export and the character roster.
//! This crate has no UI or platform-specific dependencies.

pub mod catalog;
pub mod character;
pub mod completion;
pub mod constants;
pub mod editor;
pub mod jobs;
pub mod progress;
pub mod sequence;
pub mod transfer;
pub mod validator;

// Re-export commonly used types
pub use catalog::{NodeInfo, NodeKind, ceiling_for, job_node_data, job_nodes};
pub use character::{Character, RosterError, TrackerState};
pub use completion::{
    CompletionRow, CompletionSummary, complete_step, completion_rows, completion_summary,
};
pub use editor::{EditorError, EditorEvent, EditorMode, SequenceEditor, Slot, StepForm};
pub use jobs::{JOBS, default_sequence, is_known_job};
pub use progress::Progress;
pub use sequence::{Regression, Sequence, Step};
pub use transfer::{
    ImportOutcome, SequenceExport, StateImportError, TransferError, export_sequence, export_state,
    import_sequence, import_state, sequence_file_name,
};
pub use validator::{LevelBounds, SlotPosition, StepRejection, suggest_level, validate_step};

/// Trait for abstracting persistence of the tracker state
/// Platform-specific implementations should provide this
pub trait StateStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the stored state, `None` when nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if the stored state cannot be read or decoded.
    fn load_state(&self) -> Result<Option<TrackerState>, Self::Error>;

    /// Save the state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save_state(&self, state: &TrackerState) -> Result<(), Self::Error>;

    /// Remove any stored state
    ///
    /// # Errors
    ///
    /// Returns an error if the stored state cannot be removed.
    fn clear_state(&self) -> Result<(), Self::Error>;
}

/// Loads and saves tracker state through a storage backend
pub struct Tracker<S>
where
    S: StateStorage,
{
    storage: S,
}

impl<S> Tracker<S>
where
    S: StateStorage,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored state, or a fresh one when nothing usable is stored.
    ///
    /// A state written under another schema version is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn load(&self) -> Result<TrackerState, S::Error> {
        match self.storage.load_state()? {
            Some(state) if state.is_current_version() => Ok(state),
            Some(state) => {
                log::warn!(
                    "stored state version {} does not match {}, resetting to default",
                    state.version,
                    constants::STATE_VERSION
                );
                Ok(TrackerState::default())
            }
            None => Ok(TrackerState::default()),
        }
    }

    /// Save the state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be saved.
    pub fn save(&self, state: &TrackerState) -> Result<(), S::Error> {
        self.storage.save_state(state)
    }

    /// Forget the stored state
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn reset(&self) -> Result<TrackerState, S::Error> {
        self.storage.clear_state()?;
        Ok(TrackerState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Option<TrackerState>>>,
    }

    impl StateStorage for MemoryStorage {
        type Error = Infallible;

        fn load_state(&self) -> Result<Option<TrackerState>, Self::Error> {
            Ok(self.saved.borrow().clone())
        }

        fn save_state(&self, state: &TrackerState) -> Result<(), Self::Error> {
            *self.saved.borrow_mut() = Some(state.clone());
            Ok(())
        }

        fn clear_state(&self) -> Result<(), Self::Error> {
            self.saved.borrow_mut().take();
            Ok(())
        }
    }

    #[test]
    fn tracker_roundtrips_state() {
        let tracker = Tracker::new(MemoryStorage::default());
        let mut state = tracker.load().unwrap();
        assert!(state.characters.is_empty());

        let id = state.create_character("Aria", "Hayato", 275).unwrap();
        state
            .update_character(&id, |ch| {
                ch.with_progress("origin", 12)
                    .with_sequence(Sequence::from_pairs(&[("origin", 13)]))
            })
            .unwrap();
        tracker.save(&state).unwrap();

        let loaded = tracker.load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.active_character().map(|ch| ch.level), Some(275));
    }

    #[test]
    fn mismatched_version_resets_to_default() {
        let storage = MemoryStorage::default();
        let mut stale = TrackerState::default();
        stale.create_character("Old", "Hero", 260).unwrap();
        stale.version = 1;
        storage.save_state(&stale).unwrap();

        let tracker = Tracker::new(storage);
        let loaded = tracker.load().unwrap();
        assert!(loaded.characters.is_empty());
        assert!(loaded.is_current_version());
    }

    #[test]
    fn reset_clears_storage() {
        let tracker = Tracker::new(MemoryStorage::default());
        let mut state = TrackerState::default();
        state.create_character("Aria", "Hero", 260).unwrap();
        tracker.save(&state).unwrap();
        let fresh = tracker.reset().unwrap();
        assert!(fresh.characters.is_empty());
        assert!(tracker.storage().load_state().unwrap().is_none());
    }
}
