//! Level-bound validation for planned steps.
//!
//! A step for node `n` placed at some position must satisfy
//! `reached < target`, `previous < target` and `target < next`, where
//! `reached` is the character's progress on `n`, `previous` is the level of
//! the closest earlier occurrence of `n` and `next` is the level of the
//! closest later occurrence (or `ceiling + 1` when there is none).
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::catalog::ceiling_for;
use crate::constants::MIN_TARGET_LEVEL;
use crate::progress::Progress;
use crate::sequence::{Sequence, Step};

/// Where a candidate step would land in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    /// A new step inserted before this index.
    Insert(usize),
    /// The existing step at this index is being replaced. It is excluded from the neighbour scans.
    Replace(usize),
}

impl SlotPosition {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Insert(index) | Self::Replace(index) => index,
        }
    }

    const fn backward_end(self) -> usize {
        self.index()
    }

    const fn forward_start(self) -> usize {
        match self {
            Self::Insert(index) => index,
            Self::Replace(index) => index + 1,
        }
    }
}

/// Why a candidate step was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepRejection {
    #[error("must exceed currently reached level (Lv.{reached})")]
    BelowReached { reached: u8 },
    #[error("must exceed previous step (Lv.{previous})")]
    BelowPrevious { previous: u8 },
    #[error("must be below next step (Lv.{next})")]
    AboveNext { next: u8 },
}

/// The limits a step for one node must respect at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBounds {
    /// Level already reached by the character.
    pub reached: u8,
    /// Level of the closest earlier occurrence, 0 when none.
    pub previous: u8,
    /// Level of the closest later occurrence, `ceiling + 1` when none. Exclusive.
    pub next: u8,
    pub ceiling: u8,
}

impl LevelBounds {
    #[must_use]
    pub fn compute(
        sequence: &Sequence,
        position: SlotPosition,
        node_id: &str,
        progress: &Progress,
    ) -> Self {
        let ceiling = ceiling_for(node_id);
        let previous = sequence
            .previous_occurrence(node_id, position.backward_end())
            .and_then(|idx| sequence.get(idx))
            .map_or(0, |step| step.target_level);
        let next = sequence
            .next_occurrence(node_id, position.forward_start())
            .and_then(|idx| sequence.get(idx))
            .map_or(ceiling.saturating_add(1), |step| step.target_level);
        Self {
            reached: progress.level(node_id),
            previous,
            next,
            ceiling,
        }
    }

    /// Check `target` against the three bounds, in reached/previous/next order.
    ///
    /// # Errors
    ///
    /// Returns the first bound `target` violates.
    pub const fn check(&self, target: u8) -> Result<(), StepRejection> {
        if target <= self.reached {
            return Err(StepRejection::BelowReached {
                reached: self.reached,
            });
        }
        if target <= self.previous {
            return Err(StepRejection::BelowPrevious {
                previous: self.previous,
            });
        }
        if target >= self.next {
            return Err(StepRejection::AboveNext { next: self.next });
        }
        Ok(())
    }

    /// One above the tighter lower bound, capped at the ceiling.
    #[must_use]
    pub fn suggested(&self) -> u8 {
        let floor = self.reached.max(self.previous);
        floor.saturating_add(1).min(self.ceiling)
    }

    /// Every level that would pass [`Self::check`], or `None` when the slot is full.
    #[must_use]
    pub fn allowed(&self) -> Option<RangeInclusive<u8>> {
        let low = self.reached.max(self.previous).saturating_add(1);
        let high = self.next.saturating_sub(1).min(self.ceiling);
        (low <= high).then_some(low..=high)
    }
}

/// Validate a candidate step at `position`.
///
/// # Errors
///
/// Returns a [`StepRejection`] naming the bound the candidate breaks.
pub fn validate_step(
    sequence: &Sequence,
    position: SlotPosition,
    candidate: &Step,
    progress: &Progress,
) -> Result<(), StepRejection> {
    LevelBounds::compute(sequence, position, &candidate.node_id, progress)
        .check(candidate.target_level)
}

/// Starting level offered when a slot opens for `node_id`.
#[must_use]
pub fn suggest_level(
    sequence: &Sequence,
    position: SlotPosition,
    node_id: &str,
    progress: &Progress,
) -> u8 {
    LevelBounds::compute(sequence, position, node_id, progress).suggested()
}

/// Coerce raw input into `[1, ceiling(node_id)]`.
#[must_use]
pub fn clamp_target_level(node_id: &str, raw: i64) -> u8 {
    let clamped = raw.clamp(
        i64::from(MIN_TARGET_LEVEL),
        i64::from(ceiling_for(node_id)),
    );
    u8::try_from(clamped).unwrap_or(MIN_TARGET_LEVEL)
}
