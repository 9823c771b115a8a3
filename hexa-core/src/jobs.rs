//! Per-job data tables: supported jobs, skill names/icons and canned sequences.
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::sequence::Sequence;

/// Display data for one node of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillData {
    pub name: &'static str,
    pub icon: &'static str,
}

const fn skill(name: &'static str, icon: &'static str) -> SkillData {
    SkillData { name, icon }
}

/// Jobs offered when creating a character, sorted alphabetically.
pub static JOBS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut jobs = vec![
        // Warriors
        "Hero", "Paladin", "Dark Knight", "Dawn Warrior", "Mihile", "Aran", "Blaster",
        "Demon Slayer", "Demon Avenger", "Kaiser", "Adele", "Zero", "Hayato",
        // Magicians
        "Arch Mage (Fire/Poison)", "Arch Mage (Ice/Lightning)", "Bishop", "Blaze Wizard",
        "Evan", "Luminous", "Battle Mage", "Kinesis", "Illium", "Lara", "Beast Tamer", "Lynn",
        "Kanna",
        // Bowmen
        "Bowmaster", "Marksman", "Pathfinder", "Wind Archer", "Mercedes", "Wild Hunter", "Kain",
        // Thieves
        "Night Lord", "Shadower", "Dual Blade", "Night Walker", "Phantom", "Cadena", "Kali",
        "Hoyoung",
        // Pirates
        "Buccaneer", "Corsair", "Cannoneer", "Thunder Breaker", "Shade", "Mechanic", "Xenon",
        "Angelic Buster", "Ark",
    ];
    jobs.sort_unstable();
    jobs
});

static HERO_SKILLS: [(&str, SkillData); 7] = [
    ("origin", skill("Spirit Caliburn", "⚔️")),
    ("m1", skill("Raging Blow VI", "🗡️")),
    ("m2", skill("Puncture VI", "🤺")),
    ("b1", skill("Burning Soul Blade", "🔥")),
    ("b2", skill("Instinctual Combo", "🤜")),
    ("b3", skill("Rage Uprising", "😡")),
    ("b4", skill("Worldreaver", "🌍")),
];

static HAYATO_SKILLS: [(&str, SkillData); 10] = [
    ("origin", skill("Shin Quick Draw", "assets/skills/hayato/h1_Shin_Quick_Draw.png")),
    ("ascent", skill("Fleeting Breath", "assets/skills/hayato/h2_Fleeting_Breath.png")),
    (
        "m1",
        skill(
            "[Shinsoku] Mist Slash VI\nAfterimage Slash VI",
            "assets/skills/hayato/m1_[Shinsoku]_Mist_Slash.png",
        ),
    ),
    (
        "m2",
        skill(
            "[Shinsoku] Silent Arc VI\nCrescent Moon Cut VI",
            "assets/skills/hayato/m2_[Shinsoku]_Silent_Arc.png",
        ),
    ),
    (
        "m3",
        skill(
            "[Battou] Dark Moon Cut VI",
            "assets/skills/hayato/m3_[Battou]_Dark_Moon_Cut.png",
        ),
    ),
    (
        "m4",
        skill(
            "[Battou] Full Moon's Rage VI",
            "assets/skills/hayato/m4_[Battou]_Full_Moon's_Rage.png",
        ),
    ),
    ("b1", skill("Shogetsu Form", "assets/skills/hayato/b1_Shogetsu_Form.png")),
    (
        "b2",
        skill(
            "[Shinsoku] Crashing Tide",
            "assets/skills/hayato/b2_[Shinsoku]_Crashing_Tide.png",
        ),
    ),
    (
        "b3",
        skill(
            "[Shinsoku] Light Cutter",
            "assets/skills/hayato/b3_[Shinsoku]_Light_Cutter.png",
        ),
    ),
    (
        "b4",
        skill(
            "[Battou] Wailing Heavens",
            "assets/skills/hayato/b4_[Battou]_Wailing_Heavens.png",
        ),
    ),
];

/// Skills shared by every job.
static COMMON_SKILLS: [(&str, SkillData); 1] = [("common_1", skill("Sol Janus", "🌌"))];

static JOB_SKILLS: Lazy<HashMap<&'static str, &'static [(&'static str, SkillData)]>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, &'static [(&'static str, SkillData)]> =
            HashMap::new();
        map.insert("Hero", &HERO_SKILLS);
        map.insert("Hayato", &HAYATO_SKILLS);
        map
    });

/// Balanced fallback path: unlock everything, then push Origin, Mastery and Boost.
const DEFAULT_SEQUENCE: &[(&str, u8)] = &[
    ("origin", 1),
    ("m1", 1),
    ("b1", 1),
    ("m2", 1),
    ("b2", 1),
    ("common_1", 1),
    ("origin", 9),
    ("origin", 10),
    ("m1", 10),
    ("m2", 10),
    ("b1", 10),
    ("b2", 10),
    ("origin", 20),
    ("origin", 30),
    ("m1", 30),
    ("m2", 30),
    ("b1", 30),
    ("b2", 30),
];

const HERO_SEQUENCE: &[(&str, u8)] = &[("origin", 1)];

const HAYATO_SEQUENCE: &[(&str, u8)] = &[
    ("origin", 1),
    ("m4", 1),
    ("m3", 1),
    ("m1", 1),
    ("b4", 1),
    ("m4", 4),
    ("b1", 1),
    ("m4", 9),
    ("b4", 4),
    ("b1", 4),
    ("m1", 3),
    ("b4", 10),
    ("b1", 7),
    ("ascent", 1),
    ("stat_1", 20),
    ("m2", 1),
    ("m1", 5),
    ("m4", 14),
    ("m1", 7),
    ("m3", 3),
    ("m4", 19),
    ("stat_2", 20),
    ("m1", 9),
    ("ascent", 3),
    ("b1", 10),
    ("origin", 4),
    ("b4", 12),
    ("b2", 1),
    ("stat_3", 20),
    ("ascent", 5),
    ("m3", 4),
    ("b4", 20),
    ("origin", 9),
    ("m4", 29),
    ("m3", 7),
    ("b3", 1),
    ("m1", 15),
    ("m3", 9),
    ("ascent", 7),
    ("b1", 13),
    ("b4", 30),
    ("m1", 19),
    ("m2", 2),
    ("ascent", 9),
    ("origin", 12),
    ("b1", 16),
    ("m4", 30),
    ("m3", 11),
    ("b1", 19),
    ("origin", 16),
    ("m1", 23),
    ("b1", 22),
    ("m2", 5),
    ("b2", 4),
    ("m1", 25),
    ("origin", 19),
    ("m3", 12),
    ("b1", 25),
    ("m1", 29),
    ("b1", 28),
    ("m2", 7),
    ("origin", 23),
    ("m3", 15),
    ("ascent", 12),
    ("m3", 19),
    ("origin", 29),
    ("m2", 9),
    ("origin", 30),
    ("b2", 7),
    ("b3", 4),
    ("b2", 10),
    ("b3", 10),
    ("m3", 29),
    ("ascent", 14),
    ("m2", 12),
    ("ascent", 19),
    ("m1", 30),
    ("m2", 17),
    ("b2", 12),
    ("m2", 19),
    ("b2", 20),
    ("m3", 30),
    ("b3", 12),
    ("b1", 30),
    ("b3", 20),
    ("ascent", 30),
    ("m2", 29),
    ("b2", 30),
    ("b3", 30),
    ("m2", 30),
];

/// Jobs that ship their own canned sequence.
pub const JOBS_WITH_SEQUENCES: [&str; 2] = ["Hayato", "Hero"];

/// Job-specific display data for a node, if the job defines one.
#[must_use]
pub fn job_skill(job: &str, node_id: &str) -> Option<SkillData> {
    JOB_SKILLS
        .get(job)
        .and_then(|skills| skills.iter().find(|(id, _)| *id == node_id))
        .map(|(_, data)| *data)
}

/// Shared display data for nodes common to every job.
#[must_use]
pub fn common_skill(node_id: &str) -> Option<SkillData> {
    COMMON_SKILLS
        .iter()
        .find(|(id, _)| *id == node_id)
        .map(|(_, data)| *data)
}

#[must_use]
pub fn is_known_job(job: &str) -> bool {
    JOBS.iter().any(|known| *known == job)
}

/// The job's own canned sequence, if it ships one.
#[must_use]
pub fn canned_sequence(job: &str) -> Option<Sequence> {
    match job {
        "Hero" => Some(Sequence::from_pairs(HERO_SEQUENCE)),
        "Hayato" => Some(Sequence::from_pairs(HAYATO_SEQUENCE)),
        _ => None,
    }
}

/// The global fallback sequence used by jobs without a canned one.
#[must_use]
pub fn fallback_sequence() -> Sequence {
    Sequence::from_pairs(DEFAULT_SEQUENCE)
}

/// The job's canned sequence, or the global fallback when none is defined.
#[must_use]
pub fn default_sequence(job: &str) -> Sequence {
    canned_sequence(job).unwrap_or_else(fallback_sequence)
}
