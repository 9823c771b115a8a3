//! Characters and the whole-state envelope that stores them.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::constants::{
    CHARACTER_ID_PREFIX, MAX_CHARACTER_LEVEL, MIN_CHARACTER_LEVEL, STATE_VERSION,
};
use crate::jobs::{default_sequence, is_known_job};
use crate::progress::Progress;
use crate::sequence::Sequence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("character name must not be empty")]
    EmptyName,
    #[error("unknown job: {0}")]
    UnknownJob(String),
    #[error("no character with id {0}")]
    UnknownCharacter(String),
    #[error("roster position {index} is out of range for {len} characters")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A tracked character with its progress and optional custom sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub job: String,
    pub level: u16,
    #[serde(default)]
    pub skill_progress: Progress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_sequence: Option<Sequence>,
    /// Keys written by other tools, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        job: impl Into<String>,
        level: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            job: job.into(),
            level: level.clamp(MIN_CHARACTER_LEVEL, MAX_CHARACTER_LEVEL),
            skill_progress: Progress::new(),
            priority_sequence: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.priority_sequence.is_some()
    }

    /// The custom sequence if set, else the job default.
    #[must_use]
    pub fn active_sequence(&self) -> Sequence {
        self.priority_sequence
            .clone()
            .unwrap_or_else(|| default_sequence(&self.job))
    }

    #[must_use]
    pub fn with_progress(&self, node_id: &str, level: i64) -> Self {
        Self {
            skill_progress: self.skill_progress.with_progress(node_id, level),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sequence(&self, sequence: Sequence) -> Self {
        Self {
            priority_sequence: Some(sequence),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_custom_sequence(&self) -> Self {
        Self {
            priority_sequence: None,
            ..self.clone()
        }
    }
}

const fn current_version() -> u32 {
    STATE_VERSION
}

/// Everything the tracker persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub characters: BTreeMap<String, Character>,
    #[serde(default)]
    pub character_order: Vec<String>,
    #[serde(default)]
    pub active_character_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            version: current_version(),
            characters: BTreeMap::new(),
            character_order: Vec::new(),
            active_character_id: None,
            extra: Map::new(),
        }
    }
}

impl TrackerState {
    #[must_use]
    pub const fn is_current_version(&self) -> bool {
        self.version == STATE_VERSION
    }

    #[must_use]
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    #[must_use]
    pub fn active_character(&self) -> Option<&Character> {
        self.active_character_id
            .as_deref()
            .and_then(|id| self.characters.get(id))
    }

    /// Characters in roster order, then any the order list does not mention.
    #[must_use]
    pub fn ordered_characters(&self) -> Vec<&Character> {
        let mut ordered: Vec<&Character> = self
            .character_order
            .iter()
            .filter_map(|id| self.characters.get(id))
            .collect();
        ordered.extend(
            self.characters
                .values()
                .filter(|ch| !self.character_order.contains(&ch.id)),
        );
        ordered
    }

    /// Add a character and make it active. Returns the new id.
    ///
    /// # Errors
    ///
    /// Fails when the trimmed name is empty or the job is not supported.
    pub fn create_character(
        &mut self,
        name: &str,
        job: &str,
        level: u16,
    ) -> Result<String, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !is_known_job(job) {
            return Err(RosterError::UnknownJob(job.to_string()));
        }
        let id = self.next_character_id();
        let character = Character::new(id.clone(), name, job, level);
        log::info!("created character {id} ({job} Lv.{})", character.level);
        self.characters.insert(id.clone(), character);
        self.character_order.push(id.clone());
        self.active_character_id = Some(id.clone());
        Ok(id)
    }

    /// Remove a character. The selection is cleared if it pointed there.
    ///
    /// # Errors
    ///
    /// Fails when no character has `id`.
    pub fn delete_character(&mut self, id: &str) -> Result<Character, RosterError> {
        let removed = self
            .characters
            .remove(id)
            .ok_or_else(|| RosterError::UnknownCharacter(id.to_string()))?;
        self.character_order.retain(|cid| cid != id);
        if self.active_character_id.as_deref() == Some(id) {
            self.active_character_id = None;
        }
        log::info!("deleted character {id}");
        Ok(removed)
    }

    /// Move the character at roster position `from` to `to`.
    ///
    /// Positions index the displayed roster. The stored order is rewritten
    /// in full, dropping stale ids and listing every character.
    ///
    /// # Errors
    ///
    /// Fails when either position is outside the roster.
    pub fn move_character(&mut self, from: usize, to: usize) -> Result<(), RosterError> {
        let mut order: Vec<String> = self
            .ordered_characters()
            .iter()
            .map(|ch| ch.id.clone())
            .collect();
        let len = order.len();
        for index in [from, to] {
            if index >= len {
                return Err(RosterError::IndexOutOfRange { index, len });
            }
        }
        let moved = order.remove(from);
        order.insert(to, moved);
        self.character_order = order;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when no character has `id`.
    pub fn select_character(&mut self, id: &str) -> Result<(), RosterError> {
        if !self.characters.contains_key(id) {
            return Err(RosterError::UnknownCharacter(id.to_string()));
        }
        self.active_character_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.active_character_id = None;
    }

    /// Replace a character with the result of `update`.
    ///
    /// # Errors
    ///
    /// Fails when no character has `id`.
    pub fn update_character<F>(&mut self, id: &str, update: F) -> Result<(), RosterError>
    where
        F: FnOnce(&Character) -> Character,
    {
        let slot = self
            .characters
            .get_mut(id)
            .ok_or_else(|| RosterError::UnknownCharacter(id.to_string()))?;
        *slot = update(slot);
        Ok(())
    }

    fn next_character_id(&self) -> String {
        (1_u32..)
            .map(|n| format!("{CHARACTER_ID_PREFIX}{n}"))
            .find(|candidate| !self.characters.contains_key(candidate))
            .unwrap_or_else(|| format!("{CHARACTER_ID_PREFIX}{}", self.characters.len() + 1))
    }
}
