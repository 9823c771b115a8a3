//! Static registry of upgrade nodes and their level ceilings.
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CEILING, ICON_GLYPH_MAX_UNITS, PLACEHOLDER_ICON, STAT_CEILING};
use crate::jobs;

/// Category of an upgrade node. Determines the node's level ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Skill,
    Mastery,
    Boost,
    Common,
    Stat,
}

impl NodeKind {
    /// Maximum level reachable by nodes of this kind.
    #[must_use]
    pub const fn ceiling(self) -> u8 {
        match self {
            Self::Stat => STAT_CEILING,
            Self::Skill | Self::Mastery | Self::Boost | Self::Common => DEFAULT_CEILING,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Mastery => "mastery",
            Self::Boost => "boost",
            Self::Common => "common",
            Self::Stat => "stat",
        }
    }
}

/// Catalog entry shared by every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDef {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: NodeKind,
}

/// The standard slots available to all classes, in display order.
pub const NODES: [NodeDef; 14] = [
    NodeDef { id: "origin", label: "Origin Skill (H1)", kind: NodeKind::Skill },
    NodeDef { id: "ascent", label: "Ascent Skill (H2)", kind: NodeKind::Skill },
    NodeDef { id: "m1", label: "Mastery I (M1)", kind: NodeKind::Mastery },
    NodeDef { id: "m2", label: "Mastery II (M2)", kind: NodeKind::Mastery },
    NodeDef { id: "m3", label: "Mastery III (M3)", kind: NodeKind::Mastery },
    NodeDef { id: "m4", label: "Mastery IV (M4)", kind: NodeKind::Mastery },
    NodeDef { id: "b1", label: "Boost I (B1)", kind: NodeKind::Boost },
    NodeDef { id: "b2", label: "Boost II (B2)", kind: NodeKind::Boost },
    NodeDef { id: "b3", label: "Boost III (B3)", kind: NodeKind::Boost },
    NodeDef { id: "b4", label: "Boost IV (B4)", kind: NodeKind::Boost },
    NodeDef { id: "common_1", label: "Sol Janus", kind: NodeKind::Common },
    NodeDef { id: "stat_1", label: "HEXA Stat I", kind: NodeKind::Stat },
    NodeDef { id: "stat_2", label: "HEXA Stat II", kind: NodeKind::Stat },
    NodeDef { id: "stat_3", label: "HEXA Stat III", kind: NodeKind::Stat },
];

/// Node metadata resolved for a particular job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub display_name: String,
    pub icon: String,
}

impl NodeInfo {
    #[must_use]
    pub const fn ceiling(&self) -> u8 {
        self.kind.ceiling()
    }

    /// Whether the icon refers to an image asset rather than a glyph.
    #[must_use]
    pub fn icon_is_image(&self) -> bool {
        self.icon.encode_utf16().count() > ICON_GLYPH_MAX_UNITS
    }
}

/// Look up a catalog entry by id.
#[must_use]
pub fn node_def(node_id: &str) -> Option<&'static NodeDef> {
    NODES.iter().find(|node| node.id == node_id)
}

/// Level ceiling for a node id. Ids outside the catalog use the default ceiling.
#[must_use]
pub fn ceiling_for(node_id: &str) -> u8 {
    node_def(node_id).map_or(DEFAULT_CEILING, |node| node.kind.ceiling())
}

/// Resolve display data for a node.
///
/// Job-specific entries win over the shared common table, which wins over the
/// generic catalog label. Returns `None` for ids outside the catalog.
#[must_use]
pub fn job_node_data(job: &str, node_id: &str) -> Option<NodeInfo> {
    let generic = node_def(node_id)?;
    let specific = jobs::job_skill(job, node_id).or_else(|| jobs::common_skill(node_id));
    Some(NodeInfo {
        id: generic.id.to_string(),
        kind: generic.kind,
        display_name: specific.map_or(generic.label, |s| s.name).to_string(),
        icon: specific.map_or(PLACEHOLDER_ICON, |s| s.icon).to_string(),
    })
}

/// Every catalog node resolved for `job`, in catalog order.
#[must_use]
pub fn job_nodes(job: &str) -> Vec<NodeInfo> {
    NODES
        .iter()
        .filter_map(|node| job_node_data(job, node.id))
        .collect()
}
