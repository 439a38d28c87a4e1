//! Record domain model.
//!
//! # Responsibility
//! - Define the opaque, ordered field tuple every source row becomes.
//! - Provide positional accessors without interpreting field content.
//!
//! # Invariants
//! - Field order matches the backing source's column order.
//! - Records are immutable after load; pagination never rewrites them.

use serde::{Deserialize, Serialize};

/// Stable identity for one record within a loaded dataset.
///
/// Assigned once at load time from the original ordering, starting at 0, and
/// never reassigned to a different record — even after that record is
/// deleted. Kept as a type alias to make semantic intent explicit in
/// signatures.
pub type RecordIndex = usize;

/// One row from the backing export, fields in source column order.
///
/// Pagination treats records as opaque values; domain meaning of individual
/// fields belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Creates a record from raw source fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns all fields in source column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns one field by zero-based column position.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}
