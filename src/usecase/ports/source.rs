use thiserror::Error;

use crate::domain::entities::table::RawTable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("dataset not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

/// Acquisition boundary: anything able to hand over a fully materialized table.
pub trait TableSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> Result<RawTable, SourceError>;
}

/// Source backed by a table already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub table: RawTable,
}

impl InMemorySource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }
}

impl TableSource for InMemorySource {
    fn describe(&self) -> String {
        "in-memory table".to_string()
    }

    fn load(&self) -> Result<RawTable, SourceError> {
        Ok(self.table.clone())
    }
}
