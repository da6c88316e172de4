use serde::{Deserialize, Serialize};

/// One rule record for a flow code; the canonical typed model the engine
/// operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Primary identifier. Stable; node identity in the alias graph.
    pub code: String,
    /// Secondary identifier. Not unique across records; used only as the
    /// target namespace of alias redirects, never to fetch by primary key.
    pub mapping: String,
    /// Human-readable flow name, display only.
    pub name: String,
    /// Ordered location rules. The observed data carries at most two
    /// slots, but the sequence is arbitrary-length.
    pub location_rules: Vec<LocationRule>,
    /// When present, this record's effective rules are not its own: they
    /// come from the record whose `mapping` equals this value.
    pub attached_mapping: Option<String>,
}

/// A physical location paired with the time rule under which it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRule {
    pub location: String,
    pub rule: String,
}

impl FlowRecord {
    /// The attachment target, with empty and whitespace-only mapping codes
    /// treated as absent.
    pub fn attachment(&self) -> Option<&str> {
        self.attached_mapping
            .as_deref()
            .map(str::trim)
            .filter(|mapping| !mapping.is_empty())
    }

    pub fn is_attached(&self) -> bool {
        self.attachment().is_some()
    }
}
