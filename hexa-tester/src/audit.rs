use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

use hexa_core::catalog::{NODES, NodeKind, node_def};
use hexa_core::jobs::canned_sequence;
use hexa_core::{
    ImportOutcome, Progress, Sequence, SlotPosition, default_sequence, import_sequence,
    validate_step,
};

/// Where an audited sequence came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum SequenceSource {
    /// Shipped with the job.
    Canned,
    /// The global fallback used by jobs without their own sequence.
    Fallback,
    /// Read from an exported sequence file.
    Imported(String),
}

impl SequenceSource {
    pub fn label(&self) -> String {
        match self {
            Self::Canned => "canned".to_string(),
            Self::Fallback => "fallback".to_string(),
            Self::Imported(path) => format!("import {path}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceAudit {
    pub job: String,
    pub source: SequenceSource,
    pub steps: usize,
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Highest planned level per node, in first-appearance order.
    pub final_levels: Vec<(String, u8)>,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl SequenceAudit {
    fn new(job: &str, source: SequenceSource) -> Self {
        Self {
            job: job.to_string(),
            source,
            steps: 0,
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            final_levels: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    fn finish(mut self, strict: bool, started: Instant) -> Self {
        if strict {
            let promoted = std::mem::take(&mut self.warnings);
            self.errors.extend(promoted);
        }
        self.passed = self.errors.is_empty();
        self.duration = started.elapsed();
        log::debug!(
            "audited {} ({}): {} errors, {} warnings",
            self.job,
            self.source.label(),
            self.errors.len(),
            self.warnings.len()
        );
        self
    }
}

/// Replay `sequence` step by step through the validator and check completeness.
pub fn audit_sequence(
    job: &str,
    source: SequenceSource,
    sequence: &Sequence,
    strict: bool,
) -> SequenceAudit {
    let started = Instant::now();
    let mut audit = SequenceAudit::new(job, source);
    audit.steps = sequence.len();
    audit.errors = replay_errors(sequence);
    audit.warnings = completeness_warnings(sequence);
    audit.final_levels = sequence
        .final_levels()
        .into_iter()
        .map(|(id, level)| (id.to_string(), level))
        .collect();
    audit.finish(strict, started)
}

/// Audit the job's own sequence, or the fallback when it ships none.
pub fn audit_job(job: &str, strict: bool) -> SequenceAudit {
    match canned_sequence(job) {
        Some(sequence) => audit_sequence(job, SequenceSource::Canned, &sequence, strict),
        None => audit_sequence(
            job,
            SequenceSource::Fallback,
            &default_sequence(job),
            strict,
        ),
    }
}

/// Audit an exported sequence file as if it were imported for `job`.
///
/// Parse failures and job mismatches are reported as audit errors. Only a
/// file that cannot be read at all is an `Err`.
pub fn audit_import(path: &Path, job: &str, strict: bool) -> Result<SequenceAudit> {
    let started = Instant::now();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let source = SequenceSource::Imported(path.display().to_string());
    match import_sequence(&raw, job, false, || true) {
        Ok(ImportOutcome::Applied(sequence)) => Ok(audit_sequence(job, source, &sequence, strict)),
        Ok(ImportOutcome::Declined) => Ok(SequenceAudit::new(job, source).finish(strict, started)),
        Err(err) => {
            let mut audit = SequenceAudit::new(job, source);
            audit.errors.push(err.to_string());
            Ok(audit.finish(strict, started))
        }
    }
}

fn replay_errors(sequence: &Sequence) -> Vec<String> {
    let mut errors = Vec::new();
    let mut built = Sequence::empty();
    let progress = Progress::new();
    for (idx, step) in sequence.iter().enumerate() {
        if node_def(&step.node_id).is_none() {
            errors.push(format!("step {}: unknown node {}", idx + 1, step.node_id));
        } else if let Err(reason) =
            validate_step(&built, SlotPosition::Insert(built.len()), step, &progress)
        {
            errors.push(format!(
                "step {}: {} Lv.{} {reason}",
                idx + 1,
                step.node_id,
                step.target_level
            ));
        }
        built = built.with_step(built.len(), step.clone());
    }
    errors
}

fn completeness_warnings(sequence: &Sequence) -> Vec<String> {
    let finals = sequence.final_levels();
    NODES
        .iter()
        .filter(|node| node.kind != NodeKind::Common)
        .filter_map(|node| {
            let ceiling = node.kind.ceiling();
            match finals.iter().find(|(id, _)| *id == node.id) {
                None => Some(format!("{} missing from sequence", node.id)),
                Some((_, level)) if *level < ceiling => Some(format!(
                    "{} ends at Lv.{level}, ceiling is Lv.{ceiling}",
                    node.id
                )),
                Some(_) => None,
            }
        })
        .collect()
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}
