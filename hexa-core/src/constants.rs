//! Centralized limits and identifiers for the Hexa tracker.
//!
//! Level ceilings, schema versions and storage keys live here so the
//! validator, the roster and the platform adapters agree on one set of
//! numbers.

// Levels -------------------------------------------------------------------
/// Maximum level for `stat` nodes.
pub const STAT_CEILING: u8 = 20;
/// Maximum level for every other node type.
pub const DEFAULT_CEILING: u8 = 30;
/// Lowest level a planned step may target.
pub const MIN_TARGET_LEVEL: u8 = 1;

// Editor -------------------------------------------------------------------
/// Node preselected when the insert form opens.
pub const FALLBACK_NODE_ID: &str = "common_1";
/// Icon shown when neither job nor shared data provides one.
pub const PLACEHOLDER_ICON: &str = "⚪";
/// Icons longer than this many UTF-16 units are treated as image paths.
pub const ICON_GLYPH_MAX_UNITS: usize = 4;

// Characters ---------------------------------------------------------------
pub const DEFAULT_CHARACTER_NAME: &str = "New Character";
pub const DEFAULT_CHARACTER_LEVEL: u16 = 260;
pub const MIN_CHARACTER_LEVEL: u16 = 260;
pub const MAX_CHARACTER_LEVEL: u16 = 300;
pub(crate) const CHARACTER_ID_PREFIX: &str = "char-";

// Persistence --------------------------------------------------------------
/// Schema version written with every saved state envelope.
pub const STATE_VERSION: u32 = 2;
/// Key under which the whole-state envelope is stored.
pub const STORAGE_KEY: &str = "maplestory_hexa_tracker_v1";
/// Suffix appended to exported sequence file names.
pub const SEQUENCE_EXPORT_SUFFIX: &str = "hexa-sequence.json";
/// File name for whole-state exports.
pub const STATE_EXPORT_FILE_NAME: &str = "hexa-tracker-data.json";
