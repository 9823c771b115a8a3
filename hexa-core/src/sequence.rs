//! Planned upgrade steps and the ordered sequence that holds them.
//!
//! `Sequence` is an immutable value: every transition returns a new sequence
//! and leaves the receiver untouched, so callers can hand the previous value
//! back on failure.
use serde::{Deserialize, Serialize};

/// A planned target level for one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub node_id: String,
    pub target_level: u8,
}

impl Step {
    #[must_use]
    pub fn new(node_id: impl Into<String>, target_level: u8) -> Self {
        Self {
            node_id: node_id.into(),
            target_level,
        }
    }
}

/// Two occurrences of the same node whose levels do not strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regression {
    /// Index of the earlier occurrence.
    pub earlier: usize,
    /// Index of the offending later occurrence.
    pub later: usize,
}

/// An ordered upgrade plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Step>);

impl Sequence {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn from_steps(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    /// Build a sequence from `(node_id, target_level)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, u8)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(node_id, level)| Step::new(*node_id, *level))
                .collect(),
        )
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.0.get(index)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.0
    }

    /// Insert `step` before `index`. Indexes past the end append.
    #[must_use]
    pub fn with_step(&self, index: usize, step: Step) -> Self {
        let mut steps = self.0.clone();
        steps.insert(index.min(steps.len()), step);
        Self(steps)
    }

    /// Replace the step at `index`. Out-of-range indexes leave the sequence unchanged.
    #[must_use]
    pub fn with_replaced(&self, index: usize, step: Step) -> Self {
        let mut steps = self.0.clone();
        if let Some(slot) = steps.get_mut(index) {
            *slot = step;
        }
        Self(steps)
    }

    /// Drop the step at `index`. Out-of-range indexes leave the sequence unchanged.
    #[must_use]
    pub fn without_step(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        if index < steps.len() {
            steps.remove(index);
        }
        Self(steps)
    }

    /// Move the step at `from` to position `to`, shifting the steps in between.
    ///
    /// Levels are not re-checked; moving a step past a later occurrence of the
    /// same node can produce a [`Regression`].
    #[must_use]
    pub fn moved(&self, from: usize, to: usize) -> Self {
        let mut steps = self.0.clone();
        if from < steps.len() && to < steps.len() && from != to {
            let step = steps.remove(from);
            steps.insert(to, step);
        }
        Self(steps)
    }

    /// Index of the closest occurrence of `node_id` strictly before `index`.
    #[must_use]
    pub fn previous_occurrence(&self, node_id: &str, index: usize) -> Option<usize> {
        let end = index.min(self.0.len());
        self.0[..end].iter().rposition(|step| step.node_id == node_id)
    }

    /// Index of the first occurrence of `node_id` at or after `index`.
    #[must_use]
    pub fn next_occurrence(&self, node_id: &str, index: usize) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .skip(index)
            .find(|(_, step)| step.node_id == node_id)
            .map(|(idx, _)| idx)
    }

    /// First pair of same-node occurrences whose levels fail to strictly increase.
    #[must_use]
    pub fn first_regression(&self) -> Option<Regression> {
        let mut last_seen: std::collections::HashMap<&str, usize> =
            std::collections::HashMap::new();
        for (idx, step) in self.0.iter().enumerate() {
            if let Some(&earlier) = last_seen.get(step.node_id.as_str())
                && self.0[earlier].target_level >= step.target_level
            {
                return Some(Regression {
                    earlier,
                    later: idx,
                });
            }
            last_seen.insert(step.node_id.as_str(), idx);
        }
        None
    }

    /// Whether every node's occurrences strictly increase in level.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.first_regression().is_none()
    }

    /// Highest planned level per node, in first-appearance order.
    #[must_use]
    pub fn final_levels(&self) -> Vec<(&str, u8)> {
        let mut finals: Vec<(&str, u8)> = Vec::new();
        for step in &self.0 {
            match finals.iter_mut().find(|(id, _)| *id == step.node_id) {
                Some(entry) => entry.1 = entry.1.max(step.target_level),
                None => finals.push((step.node_id.as_str(), step.target_level)),
            }
        }
        finals
    }
}

impl From<Vec<Step>> for Sequence {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl FromIterator<Step> for Sequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sequence {
        Sequence::from_pairs(&[("origin", 1), ("m1", 1), ("origin", 10)])
    }

    #[test]
    fn with_step_inserts_and_clamps_index() {
        let seq = sample();
        let inserted = seq.with_step(1, Step::new("b1", 1));
        assert_eq!(inserted.get(1), Some(&Step::new("b1", 1)));
        assert_eq!(inserted.len(), 4);
        assert_eq!(seq.len(), 3, "original is untouched");

        let appended = seq.with_step(99, Step::new("b2", 2));
        assert_eq!(appended.get(3), Some(&Step::new("b2", 2)));
    }

    #[test]
    fn without_step_then_with_step_restores_sequence() {
        let seq = sample();
        let removed = seq.without_step(1);
        assert_eq!(removed.len(), 2);
        let restored = removed.with_step(1, Step::new("m1", 1));
        assert_eq!(restored, seq);
    }

    #[test]
    fn out_of_range_edits_are_no_ops() {
        let seq = sample();
        assert_eq!(seq.without_step(7), seq);
        assert_eq!(seq.with_replaced(7, Step::new("b1", 2)), seq);
        assert_eq!(seq.moved(0, 7), seq);
    }

    #[test]
    fn moved_shifts_intervening_steps() {
        let seq = Sequence::from_pairs(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        let ids: Vec<_> = seq
            .moved(0, 2)
            .iter()
            .map(|s| s.node_id.clone())
            .collect();
        assert_eq!(ids, ["b", "c", "a", "d"]);
        let ids: Vec<_> = seq
            .moved(3, 1)
            .iter()
            .map(|s| s.node_id.clone())
            .collect();
        assert_eq!(ids, ["a", "d", "b", "c"]);
    }

    #[test]
    fn occurrence_scans_respect_boundaries() {
        let seq = sample();
        assert_eq!(seq.previous_occurrence("origin", 2), Some(0));
        assert_eq!(seq.previous_occurrence("origin", 0), None);
        assert_eq!(seq.next_occurrence("origin", 1), Some(2));
        assert_eq!(seq.next_occurrence("origin", 3), None);
        assert_eq!(seq.previous_occurrence("origin", 50), Some(2));
    }

    #[test]
    fn regression_detection_finds_descending_pairs() {
        assert!(sample().is_monotonic());
        let broken = sample().moved(2, 0);
        assert_eq!(
            broken.first_regression(),
            Some(Regression {
                earlier: 0,
                later: 1
            })
        );
        let repeated = Sequence::from_pairs(&[("b1", 4), ("b1", 4)]);
        assert!(!repeated.is_monotonic());
    }

    #[test]
    fn final_levels_track_highest_target() {
        let seq = sample();
        let finals = seq.final_levels();
        assert_eq!(finals, vec![("origin", 10), ("m1", 1)]);
    }

    #[test]
    fn serializes_as_bare_array_of_camel_case_steps() {
        let json = serde_json::to_value(Sequence::from_pairs(&[("origin", 10)])).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "nodeId": "origin", "targetLevel": 10 }])
        );
    }
}
