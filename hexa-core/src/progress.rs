//! Per-character reached levels.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::ceiling_for;

/// Mapping of node id to currently reached level. Absent nodes are level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<String, u8>);

impl Progress {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Reached level for `node_id`, 0 when never recorded.
    #[must_use]
    pub fn level(&self, node_id: &str) -> u8 {
        self.0.get(node_id).copied().unwrap_or(0)
    }

    /// Return a copy with `node_id` set to `level`, clamped to `[0, ceiling]`.
    #[must_use]
    pub fn with_progress(&self, node_id: &str, level: i64) -> Self {
        let ceiling = i64::from(ceiling_for(node_id));
        let clamped = u8::try_from(level.clamp(0, ceiling)).unwrap_or(0);
        let mut levels = self.0.clone();
        levels.insert(node_id.to_string(), clamped);
        Self(levels)
    }

    /// Whether a step targeting `target_level` on `node_id` is already reached.
    #[must_use]
    pub fn has_reached(&self, node_id: &str, target_level: u8) -> bool {
        self.level(node_id) >= target_level
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, level)| (id.as_str(), *level))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for Progress {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, level)| (id.into(), level))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_nodes_read_as_zero() {
        let progress = Progress::new();
        assert_eq!(progress.level("origin"), 0);
        assert!(progress.has_reached("origin", 0));
        assert!(!progress.has_reached("origin", 1));
    }

    #[test]
    fn with_progress_clamps_to_node_ceiling() {
        let progress = Progress::new()
            .with_progress("stat_1", 25)
            .with_progress("origin", 31)
            .with_progress("m1", -4);
        assert_eq!(progress.level("stat_1"), 20);
        assert_eq!(progress.level("origin"), 30);
        assert_eq!(progress.level("m1"), 0);
    }

    #[test]
    fn with_progress_leaves_original_untouched() {
        let before: Progress = [("origin", 3)].into_iter().collect();
        let after = before.with_progress("origin", 9);
        assert_eq!(before.level("origin"), 3);
        assert_eq!(after.level("origin"), 9);
    }

    #[test]
    fn serializes_as_plain_object() {
        let progress: Progress = [("origin", 2), ("m1", 0)].into_iter().collect();
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json, serde_json::json!({ "m1": 0, "origin": 2 }));
    }
}
