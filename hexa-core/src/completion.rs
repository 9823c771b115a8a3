//! Read-only view model for walking the active sequence.
use crate::catalog::{NodeInfo, job_node_data};
use crate::progress::Progress;
use crate::sequence::{Sequence, Step};

/// One rendered row of the completion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    /// Position of the step in the full sequence.
    pub index: usize,
    pub step: Step,
    pub node: NodeInfo,
    pub done: bool,
}

/// Counts over every step with known node data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionSummary {
    pub done: usize,
    pub total: usize,
}

impl CompletionSummary {
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.total.saturating_sub(self.done)
    }
}

/// Whether `progress` already meets the step's target.
#[must_use]
pub fn is_done(step: &Step, progress: &Progress) -> bool {
    progress.has_reached(&step.node_id, step.target_level)
}

/// Rows for `sequence` resolved against `job`.
///
/// Steps whose node id is not in the catalog are skipped. Done steps are
/// omitted unless `show_reached` is set.
#[must_use]
pub fn completion_rows(
    job: &str,
    sequence: &Sequence,
    progress: &Progress,
    show_reached: bool,
) -> Vec<CompletionRow> {
    sequence
        .iter()
        .enumerate()
        .filter_map(|(index, step)| {
            let Some(node) = job_node_data(job, &step.node_id) else {
                log::debug!("completion view: skipping unknown node {}", step.node_id);
                return None;
            };
            let done = is_done(step, progress);
            (show_reached || !done).then(|| CompletionRow {
                index,
                step: step.clone(),
                node,
                done,
            })
        })
        .collect()
}

#[must_use]
pub fn completion_summary(job: &str, sequence: &Sequence, progress: &Progress) -> CompletionSummary {
    completion_rows(job, sequence, progress, true)
        .iter()
        .fold(CompletionSummary::default(), |acc, row| CompletionSummary {
            done: acc.done + usize::from(row.done),
            total: acc.total + 1,
        })
}

/// Progress after the user marks a step as done. Clamped to the node's range.
#[must_use]
pub fn complete_step(progress: &Progress, node_id: &str, target_level: u8) -> Progress {
    progress.with_progress(node_id, i64::from(target_level))
}
