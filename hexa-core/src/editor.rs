//! Priority-sequence editor state machine.
//!
//! The editor owns a draft [`Sequence`] and an explicit [`EditorMode`]. Every
//! successful structural change yields an [`EditorEvent`] carrying the full new
//! sequence; the caller is responsible for storing it on the character.
use thiserror::Error;

use crate::constants::{FALLBACK_NODE_ID, MIN_TARGET_LEVEL};
use crate::jobs::default_sequence;
use crate::progress::Progress;
use crate::sequence::{Sequence, Step};
use crate::validator::{
    SlotPosition, StepRejection, clamp_target_level, suggest_level, validate_step,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("editor is not in editing mode")]
    NotEditing,
    #[error("no insert or edit form is open")]
    NoOpenSlot,
    #[error("step index {index} is out of range for a sequence of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid level")]
    InvalidLevel,
    #[error("sequence is already the job default")]
    NotCustom,
    #[error(transparent)]
    Rejected(#[from] StepRejection),
}

/// Inline form shown while inserting or editing a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepForm {
    pub node_id: String,
    /// Raw text of the level input, normalised on blur.
    pub level_text: String,
    pub error: Option<EditorError>,
}

impl StepForm {
    fn new(node_id: impl Into<String>, level: u8) -> Self {
        Self {
            node_id: node_id.into(),
            level_text: level.to_string(),
            error: None,
        }
    }
}

/// Sub-state while editing. At most one form is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Idle,
    Inserting { at: usize, form: StepForm },
    EditingStep { at: usize, form: StepForm },
}

impl Slot {
    const fn position(&self) -> Option<SlotPosition> {
        match self {
            Self::Idle => None,
            Self::Inserting { at, .. } => Some(SlotPosition::Insert(*at)),
            Self::EditingStep { at, .. } => Some(SlotPosition::Replace(*at)),
        }
    }

    const fn form(&self) -> Option<&StepForm> {
        match self {
            Self::Idle => None,
            Self::Inserting { form, .. } | Self::EditingStep { form, .. } => Some(form),
        }
    }

    fn form_mut(&mut self) -> Option<&mut StepForm> {
        match self {
            Self::Idle => None,
            Self::Inserting { form, .. } | Self::EditingStep { form, .. } => Some(form),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing(Slot),
}

/// Notification for the sequence owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The draft changed and should replace the character's custom sequence.
    SequenceChanged(Sequence),
    /// The custom override should be cleared so the job default applies.
    ResetRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEditor {
    job: String,
    draft: Sequence,
    is_custom: bool,
    mode: EditorMode,
}

impl SequenceEditor {
    #[must_use]
    pub fn new(job: impl Into<String>, sequence: Sequence, is_custom: bool) -> Self {
        Self {
            job: job.into(),
            draft: sequence,
            is_custom,
            mode: EditorMode::Viewing,
        }
    }

    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }

    #[must_use]
    pub const fn draft(&self) -> &Sequence {
        &self.draft
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.is_custom
    }

    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    #[must_use]
    pub const fn slot(&self) -> Option<&Slot> {
        match &self.mode {
            EditorMode::Viewing => None,
            EditorMode::Editing(slot) => Some(slot),
        }
    }

    /// The open form, if any.
    #[must_use]
    pub fn form(&self) -> Option<&StepForm> {
        self.slot().and_then(Slot::form)
    }

    /// Index the insert form sits before, if inserting.
    #[must_use]
    pub fn inserting_at(&self) -> Option<usize> {
        match self.slot() {
            Some(Slot::Inserting { at, .. }) => Some(*at),
            _ => None,
        }
    }

    /// Index of the step being edited, if any.
    #[must_use]
    pub fn editing_at(&self) -> Option<usize> {
        match self.slot() {
            Some(Slot::EditingStep { at, .. }) => Some(*at),
            _ => None,
        }
    }

    /// Pick up a sequence stored elsewhere. An open form is closed when the draft changes.
    pub fn sync(&mut self, sequence: &Sequence, is_custom: bool) {
        self.is_custom = is_custom;
        if &self.draft != sequence {
            self.draft = sequence.clone();
            self.close_slot();
        }
    }

    /// Switch between viewing and editing. Leaving editing returns the draft.
    pub fn toggle_edit(&mut self) -> Option<Sequence> {
        match self.mode {
            EditorMode::Viewing => {
                log::debug!("sequence editor: entering edit mode for {}", self.job);
                self.mode = EditorMode::Editing(Slot::Idle);
                None
            }
            EditorMode::Editing(_) => {
                log::debug!("sequence editor: leaving edit mode for {}", self.job);
                self.mode = EditorMode::Viewing;
                Some(self.draft.clone())
            }
        }
    }

    /// Open the insert form before `at`, replacing any open form.
    ///
    /// # Errors
    ///
    /// Fails when not editing or when `at` is past the end of the draft.
    pub fn begin_insert(&mut self, at: usize, progress: &Progress) -> Result<(), EditorError> {
        self.ensure_editing()?;
        if at > self.draft.len() {
            return Err(self.out_of_range(at));
        }
        let level = suggest_level(&self.draft, SlotPosition::Insert(at), FALLBACK_NODE_ID, progress);
        log::debug!("sequence editor: insert form opened at {at}");
        self.mode = EditorMode::Editing(Slot::Inserting {
            at,
            form: StepForm::new(FALLBACK_NODE_ID, level),
        });
        Ok(())
    }

    /// Open the edit form on the step at `at`, pre-filled with its values.
    ///
    /// # Errors
    ///
    /// Fails when not editing or when no step exists at `at`.
    pub fn begin_edit(&mut self, at: usize) -> Result<(), EditorError> {
        self.ensure_editing()?;
        let step = self.draft.get(at).ok_or_else(|| self.out_of_range(at))?;
        let form = StepForm::new(step.node_id.clone(), step.target_level);
        log::debug!("sequence editor: edit form opened at {at}");
        self.mode = EditorMode::Editing(Slot::EditingStep { at, form });
        Ok(())
    }

    /// Change the form's node and recompute the suggested level for it.
    ///
    /// # Errors
    ///
    /// Fails when no form is open.
    pub fn select_node(&mut self, node_id: &str, progress: &Progress) -> Result<(), EditorError> {
        let position = self.open_position()?;
        let level = suggest_level(&self.draft, position, node_id, progress);
        let form = self.form_mut()?;
        form.node_id = node_id.to_string();
        form.level_text = level.to_string();
        form.error = None;
        Ok(())
    }

    /// Store raw level text as typed. Clears any inline error.
    ///
    /// # Errors
    ///
    /// Fails when no form is open.
    pub fn set_level_text(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        let form = self.form_mut()?;
        form.level_text = text.into();
        form.error = None;
        Ok(())
    }

    /// Normalise the level text: empty becomes the suggestion, junk becomes 1,
    /// and numbers are clamped into the node's range.
    ///
    /// # Errors
    ///
    /// Fails when no form is open.
    pub fn blur_level(&mut self, progress: &Progress) -> Result<(), EditorError> {
        let position = self.open_position()?;
        let draft = self.draft.clone();
        let form = self.form_mut()?;
        let trimmed = form.level_text.trim();
        let level = if trimmed.is_empty() {
            suggest_level(&draft, position, &form.node_id, progress)
        } else {
            leading_integer(trimmed).map_or(MIN_TARGET_LEVEL, |raw| {
                clamp_target_level(&form.node_id, raw)
            })
        };
        form.level_text = level.to_string();
        Ok(())
    }

    /// Submit whichever form is open with its current node and level text.
    ///
    /// # Errors
    ///
    /// Fails with [`EditorError::InvalidLevel`] for unparsable text, otherwise as
    /// [`Self::confirm_insert`] / [`Self::confirm_edit`]. The form stays open.
    pub fn submit(&mut self, progress: &Progress) -> Result<EditorEvent, EditorError> {
        let position = self.open_position()?;
        let form = self.form_mut()?;
        let node_id = form.node_id.clone();
        let Some(level) = parse_level(&form.level_text, &node_id) else {
            form.error = Some(EditorError::InvalidLevel);
            return Err(EditorError::InvalidLevel);
        };
        match position {
            SlotPosition::Insert(_) => self.confirm_insert(&node_id, level, progress),
            SlotPosition::Replace(_) => self.confirm_edit(&node_id, level, progress),
        }
    }

    /// Validate and splice a new step at the insert position.
    ///
    /// # Errors
    ///
    /// Fails when no insert form is open, or with [`EditorError::Rejected`] when the
    /// step breaks a level bound. A rejection is also shown on the form.
    pub fn confirm_insert(
        &mut self,
        node_id: &str,
        target_level: u8,
        progress: &Progress,
    ) -> Result<EditorEvent, EditorError> {
        let Some(Slot::Inserting { at, .. }) = self.slot() else {
            return Err(self.no_slot_error());
        };
        let at = *at;
        let step = Step::new(node_id, target_level);
        self.check_candidate(SlotPosition::Insert(at), &step, progress)?;
        log::debug!("sequence editor: inserted {node_id} Lv.{target_level} at {at}");
        let next = self.draft.with_step(at, step);
        Ok(self.commit(next))
    }

    /// Validate and replace the step being edited.
    ///
    /// # Errors
    ///
    /// Fails when no edit form is open, or with [`EditorError::Rejected`] when the
    /// step breaks a level bound. A rejection is also shown on the form.
    pub fn confirm_edit(
        &mut self,
        node_id: &str,
        target_level: u8,
        progress: &Progress,
    ) -> Result<EditorEvent, EditorError> {
        let Some(Slot::EditingStep { at, .. }) = self.slot() else {
            return Err(self.no_slot_error());
        };
        let at = *at;
        let step = Step::new(node_id, target_level);
        self.check_candidate(SlotPosition::Replace(at), &step, progress)?;
        log::debug!("sequence editor: replaced step {at} with {node_id} Lv.{target_level}");
        let next = self.draft.with_replaced(at, step);
        Ok(self.commit(next))
    }

    /// Delete the step at `at`.
    ///
    /// # Errors
    ///
    /// Fails when not editing or when no step exists at `at`.
    pub fn remove(&mut self, at: usize) -> Result<EditorEvent, EditorError> {
        self.ensure_editing()?;
        if at >= self.draft.len() {
            return Err(self.out_of_range(at));
        }
        log::debug!("sequence editor: removed step {at}");
        let next = self.draft.without_step(at);
        Ok(self.commit(next))
    }

    /// Move the step at `from` to `to`. Levels are not re-validated.
    ///
    /// Returns `Ok(None)` when `from == to`.
    ///
    /// # Errors
    ///
    /// Fails when not editing or when either index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<Option<EditorEvent>, EditorError> {
        self.ensure_editing()?;
        for index in [from, to] {
            if index >= self.draft.len() {
                return Err(self.out_of_range(index));
            }
        }
        if from == to {
            return Ok(None);
        }
        log::debug!("sequence editor: moved step {from} to {to}");
        let next = self.draft.moved(from, to);
        Ok(Some(self.commit(next)))
    }

    /// Close the open form without touching the draft.
    pub fn cancel(&mut self) {
        if self.form().is_some() {
            log::debug!("sequence editor: form cancelled");
        }
        self.close_slot();
    }

    /// Drop the custom override and fall back to the job default.
    ///
    /// # Errors
    ///
    /// Fails with [`EditorError::NotCustom`] when there is no override to drop.
    pub fn reset_to_default(&mut self) -> Result<EditorEvent, EditorError> {
        if !self.is_custom {
            return Err(EditorError::NotCustom);
        }
        log::debug!("sequence editor: reset requested for {}", self.job);
        self.is_custom = false;
        self.draft = default_sequence(&self.job);
        self.close_slot();
        Ok(EditorEvent::ResetRequested)
    }

    fn ensure_editing(&self) -> Result<(), EditorError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(EditorError::NotEditing)
        }
    }

    fn no_slot_error(&self) -> EditorError {
        if self.is_editing() {
            EditorError::NoOpenSlot
        } else {
            EditorError::NotEditing
        }
    }

    fn out_of_range(&self, index: usize) -> EditorError {
        EditorError::IndexOutOfRange {
            index,
            len: self.draft.len(),
        }
    }

    fn open_position(&self) -> Result<SlotPosition, EditorError> {
        self.slot()
            .and_then(Slot::position)
            .ok_or_else(|| self.no_slot_error())
    }

    fn form_mut(&mut self) -> Result<&mut StepForm, EditorError> {
        let missing = self.no_slot_error();
        match &mut self.mode {
            EditorMode::Editing(slot) => slot.form_mut().ok_or(missing),
            EditorMode::Viewing => Err(missing),
        }
    }

    fn check_candidate(
        &mut self,
        position: SlotPosition,
        step: &Step,
        progress: &Progress,
    ) -> Result<(), EditorError> {
        if let Err(rejection) = validate_step(&self.draft, position, step, progress) {
            log::debug!("sequence editor: rejected {}: {rejection}", step.node_id);
            let form = self.form_mut()?;
            form.node_id.clone_from(&step.node_id);
            form.level_text = step.target_level.to_string();
            form.error = Some(EditorError::Rejected(rejection));
            return Err(rejection.into());
        }
        Ok(())
    }

    fn commit(&mut self, next: Sequence) -> EditorEvent {
        self.draft = next;
        self.is_custom = true;
        self.close_slot();
        EditorEvent::SequenceChanged(self.draft.clone())
    }

    fn close_slot(&mut self) {
        if let EditorMode::Editing(slot) = &mut self.mode {
            *slot = Slot::Idle;
        }
    }
}

/// Parse level text into a clamped target level, `None` when not a number.
fn parse_level(text: &str, node_id: &str) -> Option<u8> {
    let raw = leading_integer(text)?;
    Some(clamp_target_level(node_id, raw))
}

/// Read the integer prefix of `text`, so "7.5" is 7 and "12abc" is 12.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for digit in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    seen.then_some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(pairs: &[(&str, u8)]) -> SequenceEditor {
        let mut editor = SequenceEditor::new("Hero", Sequence::from_pairs(pairs), false);
        assert_eq!(editor.toggle_edit(), None);
        editor
    }

    fn progress(pairs: &[(&str, u8)]) -> Progress {
        pairs.iter().copied().collect()
    }

    #[test]
    fn starts_in_viewing_mode_and_toggles() {
        let mut editor = SequenceEditor::new("Hero", Sequence::from_pairs(&[("origin", 1)]), false);
        assert!(!editor.is_editing());
        assert_eq!(editor.begin_insert(0, &Progress::new()), Err(EditorError::NotEditing));
        assert_eq!(editor.toggle_edit(), None);
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert_eq!(
            editor.toggle_edit(),
            Some(Sequence::from_pairs(&[("origin", 1)]))
        );
        assert_eq!(editor.mode(), &EditorMode::Viewing);
    }

    #[test]
    fn begin_insert_prefills_fallback_node_with_suggestion() {
        let mut editor = editing(&[("common_1", 3)]);
        editor.begin_insert(1, &Progress::new()).unwrap();
        let form = editor.form().unwrap();
        assert_eq!(form.node_id, FALLBACK_NODE_ID);
        assert_eq!(form.level_text, "4");
        assert_eq!(editor.inserting_at(), Some(1));
    }

    #[test]
    fn insert_and_edit_forms_are_mutually_exclusive() {
        let mut editor = editing(&[("origin", 1), ("m1", 1)]);
        editor.begin_insert(0, &Progress::new()).unwrap();
        editor.begin_edit(1).unwrap();
        assert_eq!(editor.inserting_at(), None);
        assert_eq!(editor.editing_at(), Some(1));
        assert_eq!(editor.form().unwrap().node_id, "m1");
        editor.begin_insert(2, &Progress::new()).unwrap();
        assert_eq!(editor.editing_at(), None);
    }

    #[test]
    fn confirm_insert_splices_and_closes_form() {
        let mut editor = editing(&[("origin", 1)]);
        editor.begin_insert(1, &Progress::new()).unwrap();
        let event = editor.confirm_insert("origin", 5, &Progress::new()).unwrap();
        let expected = Sequence::from_pairs(&[("origin", 1), ("origin", 5)]);
        assert_eq!(event, EditorEvent::SequenceChanged(expected.clone()));
        assert_eq!(editor.draft(), &expected);
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert!(editor.is_custom());
    }

    #[test]
    fn rejected_insert_keeps_form_open_with_reason() {
        let mut editor = editing(&[("origin", 1)]);
        let prog = progress(&[("origin", 1)]);
        editor.begin_insert(1, &prog).unwrap();
        let err = editor.confirm_insert("origin", 1, &prog).unwrap_err();
        assert_eq!(err, EditorError::Rejected(StepRejection::BelowReached { reached: 1 }));
        let form = editor.form().unwrap();
        assert_eq!(form.error, Some(err));
        assert_eq!(editor.draft().len(), 1);
        assert!(!editor.is_custom());
    }

    #[test]
    fn select_node_recomputes_suggestion() {
        let mut editor = editing(&[("m2", 6)]);
        let prog = progress(&[("b1", 11)]);
        editor.begin_insert(1, &prog).unwrap();
        editor.select_node("m2", &prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "7");
        editor.select_node("b1", &prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "12");
    }

    #[test]
    fn blur_normalises_level_text() {
        let mut editor = editing(&[]);
        let prog = Progress::new();
        editor.begin_insert(0, &prog).unwrap();
        editor.select_node("stat_1", &prog).unwrap();

        editor.set_level_text("").unwrap();
        editor.blur_level(&prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "1");

        editor.set_level_text("abc").unwrap();
        editor.blur_level(&prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "1");

        editor.set_level_text("99").unwrap();
        editor.blur_level(&prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "20");

        editor.set_level_text("7.5").unwrap();
        editor.blur_level(&prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "7");

        editor.set_level_text(" 12abc").unwrap();
        editor.blur_level(&prog).unwrap();
        assert_eq!(editor.form().unwrap().level_text, "12");
    }

    #[test]
    fn submit_rejects_unparsable_text() {
        let mut editor = editing(&[]);
        editor.begin_insert(0, &Progress::new()).unwrap();
        editor.set_level_text("ten").unwrap();
        assert_eq!(editor.submit(&Progress::new()), Err(EditorError::InvalidLevel));
        assert_eq!(editor.form().unwrap().error, Some(EditorError::InvalidLevel));
        editor.set_level_text("10").unwrap();
        assert!(editor.form().unwrap().error.is_none());
        assert!(editor.submit(&Progress::new()).is_ok());
        assert_eq!(editor.draft(), &Sequence::from_pairs(&[("common_1", 10)]));
    }

    #[test]
    fn submit_reads_leading_digits() {
        let mut editor = editing(&[]);
        editor.begin_insert(0, &Progress::new()).unwrap();
        editor.set_level_text("12abc").unwrap();
        assert!(editor.submit(&Progress::new()).is_ok());
        assert_eq!(editor.draft(), &Sequence::from_pairs(&[("common_1", 12)]));
    }

    #[test]
    fn leading_integer_matches_prefix_rules() {
        assert_eq!(leading_integer("7.5"), Some(7));
        assert_eq!(leading_integer("-3x"), Some(-3));
        assert_eq!(leading_integer("+8"), Some(8));
        assert_eq!(leading_integer("x7"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn submit_dispatches_edit_forms() {
        let mut editor = editing(&[("origin", 1), ("origin", 10)]);
        editor.begin_edit(0).unwrap();
        editor.set_level_text("4").unwrap();
        editor.submit(&Progress::new()).unwrap();
        assert_eq!(
            editor.draft(),
            &Sequence::from_pairs(&[("origin", 4), ("origin", 10)])
        );
    }

    #[test]
    fn remove_and_reorder_close_open_forms() {
        let mut editor = editing(&[("origin", 1), ("m1", 1), ("b1", 1)]);
        editor.begin_edit(2).unwrap();
        editor.remove(0).unwrap();
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert_eq!(editor.draft().len(), 2);

        editor.begin_insert(0, &Progress::new()).unwrap();
        let event = editor.reorder(0, 1).unwrap();
        assert_eq!(
            event,
            Some(EditorEvent::SequenceChanged(Sequence::from_pairs(&[
                ("b1", 1),
                ("m1", 1)
            ])))
        );
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert_eq!(editor.reorder(1, 1), Ok(None));
    }

    #[test]
    fn structural_edits_check_indexes() {
        let mut editor = editing(&[("origin", 1)]);
        assert_eq!(
            editor.remove(1),
            Err(EditorError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            editor.reorder(0, 3),
            Err(EditorError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(editor.begin_insert(1, &Progress::new()).is_ok());
        assert!(editor.begin_insert(2, &Progress::new()).is_err());
        assert!(editor.begin_edit(1).is_err());
    }

    #[test]
    fn cancel_discards_form_only() {
        let mut editor = editing(&[("origin", 1)]);
        editor.begin_insert(1, &Progress::new()).unwrap();
        editor.set_level_text("9").unwrap();
        editor.cancel();
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert_eq!(editor.draft(), &Sequence::from_pairs(&[("origin", 1)]));
        assert_eq!(
            editor.confirm_insert("origin", 9, &Progress::new()),
            Err(EditorError::NoOpenSlot)
        );
    }

    #[test]
    fn reset_requires_custom_sequence() {
        let mut editor = editing(&[("origin", 1)]);
        assert_eq!(editor.reset_to_default(), Err(EditorError::NotCustom));
        editor.begin_insert(1, &Progress::new()).unwrap();
        editor.confirm_insert("m1", 1, &Progress::new()).unwrap();
        assert_eq!(editor.reset_to_default(), Ok(EditorEvent::ResetRequested));
        assert!(!editor.is_custom());
        assert_eq!(editor.draft(), &default_sequence("Hero"));
    }

    #[test]
    fn sync_replaces_draft_and_closes_stale_form() {
        let mut editor = editing(&[("origin", 1)]);
        editor.begin_edit(0).unwrap();
        let same = editor.draft().clone();
        editor.sync(&same, false);
        assert_eq!(editor.editing_at(), Some(0));
        editor.sync(&Sequence::from_pairs(&[("m1", 2)]), true);
        assert_eq!(editor.slot(), Some(&Slot::Idle));
        assert!(editor.is_custom());
    }
}
