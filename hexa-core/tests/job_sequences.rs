use hexa_core::catalog::{NODES, NodeKind, ceiling_for};
use hexa_core::jobs::{JOBS_WITH_SEQUENCES, canned_sequence, fallback_sequence};
use hexa_core::{JOBS, Progress, Sequence, SlotPosition, default_sequence, job_nodes, validate_step};

/// Replay `sequence` one append at a time, the way the editor would build it.
fn replay_failures(sequence: &Sequence) -> Vec<String> {
    let mut built = Sequence::empty();
    let mut failures = Vec::new();
    for step in sequence {
        if let Err(reason) = validate_step(
            &built,
            SlotPosition::Insert(built.len()),
            step,
            &Progress::new(),
        ) {
            failures.push(format!("{} Lv.{}: {reason}", step.node_id, step.target_level));
        }
        built = built.with_step(built.len(), step.clone());
    }
    failures
}

#[test]
fn canned_sequences_replay_through_validator() {
    for job in JOBS_WITH_SEQUENCES {
        let sequence = canned_sequence(job).unwrap();
        assert!(replay_failures(&sequence).is_empty(), "{job}: {:?}", replay_failures(&sequence));
    }
    assert!(replay_failures(&fallback_sequence()).is_empty());
}

#[test]
fn hayato_sequence_maxes_every_node() {
    let sequence = canned_sequence("Hayato").unwrap();
    let finals = sequence.final_levels();
    for node in NODES.iter().filter(|node| node.kind != NodeKind::Common) {
        let final_level = finals
            .iter()
            .find(|(id, _)| *id == node.id)
            .map(|(_, level)| *level);
        assert_eq!(
            final_level,
            Some(ceiling_for(node.id)),
            "{} should end at its ceiling",
            node.id
        );
    }
}

#[test]
fn fallback_sequence_ends_core_nodes_at_max() {
    let seq = fallback_sequence();
    let finals = seq.final_levels();
    for id in ["origin", "m1", "m2", "b1", "b2"] {
        assert!(finals.contains(&(id, 30)), "{id} should reach 30");
    }
}

#[test]
fn every_job_resolves_the_full_catalog() {
    for job in JOBS.iter() {
        let nodes = job_nodes(job);
        assert_eq!(nodes.len(), NODES.len(), "{job}");
        assert!(nodes.iter().all(|node| !node.display_name.is_empty()));
        assert!(!default_sequence(job).is_empty(), "{job} has no sequence");
    }
}

#[test]
fn hayato_icons_are_assets_and_hero_icons_are_glyphs() {
    let hayato = job_nodes("Hayato");
    assert!(
        hayato
            .iter()
            .filter(|node| node.kind != NodeKind::Stat && node.kind != NodeKind::Common)
            .all(hexa_core::NodeInfo::icon_is_image)
    );
    let hero = job_nodes("Hero");
    assert!(hero.iter().all(|node| !node.icon_is_image()));
}
