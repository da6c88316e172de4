use super::FlowRepository;
use crate::error::RepositoryError;
use crate::record::{FlowRecord, FlowTable, IntoFlowTable, RawFlowRow};
use std::fs;
use std::path::Path;

/// A repository over a fixed in-memory `FlowTable`.
///
/// Stands in for the out-of-scope relational store; tests and the CLI load
/// it from a JSON array of raw storage rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    table: FlowTable,
}

impl MemoryRepository {
    pub fn new(table: FlowTable) -> Self {
        Self { table }
    }

    /// Loads a JSON array of raw storage rows from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| RepositoryError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parses a JSON array of raw storage rows.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let rows: Vec<RawFlowRow> =
            serde_json::from_str(json).map_err(|e| RepositoryError::Parse(e.to_string()))?;
        let table = rows
            .into_table()
            .map_err(|e| RepositoryError::Parse(e.to_string()))?;
        Ok(Self::new(table))
    }
}

impl FlowRepository for MemoryRepository {
    fn load_all(&self) -> Result<FlowTable, RepositoryError> {
        Ok(self.table.clone())
    }

    fn load_one(&self, code: &str) -> Result<Option<FlowRecord>, RepositoryError> {
        Ok(self.table.get(code).cloned())
    }
}
