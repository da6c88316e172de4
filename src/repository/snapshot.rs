use crate::record::FlowTable;
use chrono::NaiveDateTime;

/// Explicit snapshot lifecycle for the in-memory rule set.
///
/// Replaces a "None means not loaded" sentinel: callers ask for a load and
/// can see when the data was taken. A reload builds the new table fully
/// and then swaps it in whole; readers never see a half-updated map.
#[derive(Debug, Clone, Default)]
pub enum Snapshot {
    #[default]
    Unloaded,
    Loaded {
        table: FlowTable,
        loaded_at: NaiveDateTime,
    },
}

impl Snapshot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Snapshot::Loaded { .. })
    }

    pub fn table(&self) -> Option<&FlowTable> {
        match self {
            Snapshot::Unloaded => None,
            Snapshot::Loaded { table, .. } => Some(table),
        }
    }

    pub fn loaded_at(&self) -> Option<NaiveDateTime> {
        match self {
            Snapshot::Unloaded => None,
            Snapshot::Loaded { loaded_at, .. } => Some(*loaded_at),
        }
    }
}
