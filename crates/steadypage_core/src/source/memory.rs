//! In-memory row source for tests and demos.
//!
//! # Responsibility
//! - Serve a fixed set of raw rows without touching disk.
//!
//! # Invariants
//! - Rows are returned in construction order on every call.

use super::{RowSource, SourceResult};

/// Serves rows held in memory, header row included.
pub struct InMemorySource {
    rows: Vec<Vec<String>>,
}

impl InMemorySource {
    /// Creates a source over the given raw rows (first row is the header).
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl RowSource for InMemorySource {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read_all(&self) -> SourceResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }
}
