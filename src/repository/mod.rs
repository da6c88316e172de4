mod memory;
mod snapshot;

pub use memory::MemoryRepository;
pub use snapshot::Snapshot;

use crate::error::RepositoryError;
use crate::record::{FlowRecord, FlowTable};

/// How the `Locator` reaches the rule set. Selected by configuration, not
/// hardwired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// Bulk-load the whole table once into an in-memory snapshot.
    #[default]
    Snapshot,
    /// Fetch one record per request; bounds memory use on large tables.
    /// Alias resolution still forces a full load, since mapping lookup is
    /// a cross-record scan.
    PerRecord,
}

/// The contract the core consumes from the storage collaborator.
///
/// The relational implementation lives outside this crate; the in-tree
/// `MemoryRepository` stands in for it in tests and the CLI.
pub trait FlowRepository {
    /// Bulk fetch of every record, keyed by code. Idempotent; invoking it
    /// again re-reads the source of truth, which is how a forced snapshot
    /// refresh works.
    fn load_all(&self) -> Result<FlowTable, RepositoryError>;

    /// Single-record fetch by primary code.
    fn load_one(&self, code: &str) -> Result<Option<FlowRecord>, RepositoryError>;
}
