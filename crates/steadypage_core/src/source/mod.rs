//! Backing store readers for ordered dataset exports.
//!
//! # Responsibility
//! - Define the raw-row contract every dataset source implements.
//! - Isolate file and database access details from pagination logic.
//!
//! # Invariants
//! - `read_all` returns rows in backing-store order, header row included.
//! - Sources never filter or reorder rows; shaping belongs to the paginator.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod delimited;
mod memory;
mod sqlite;

pub use delimited::DelimitedFileSource;
pub use memory::InMemorySource;
pub use sqlite::SqliteTableSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Source-layer error: the backing store is missing, unreadable, or
/// misconfigured. Fatal for the session; the dataset is static, so no retry
/// can help without operator intervention.
#[derive(Debug)]
pub enum SourceError {
    /// Backing file missing or unreadable.
    Io {
        location: String,
        cause: std::io::Error,
    },
    /// Backing database rejected the read.
    Sqlite(rusqlite::Error),
    /// Configured table does not exist in the backing database.
    MissingTable(String),
    /// Table name contains characters outside the safe identifier set.
    InvalidTableName(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { location, cause } => {
                write!(f, "dataset source `{location}` is unavailable: {cause}")
            }
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingTable(table) => write!(f, "dataset table `{table}` does not exist"),
            Self::InvalidTableName(table) => {
                write!(f, "invalid dataset table name: `{table}`")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { cause, .. } => Some(cause),
            Self::Sqlite(err) => Some(err),
            Self::MissingTable(_) => None,
            Self::InvalidTableName(_) => None,
        }
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Contract for any source producing an ordered list of raw rows.
///
/// The first row is treated as a discardable header by the dataset loader,
/// so implementations must emit one (column names for table exports, the
/// header line for delimited files).
pub trait RowSource {
    /// Human-readable origin for logs and error messages.
    fn location(&self) -> String;

    /// Reads every raw row in backing-store order, header row included.
    fn read_all(&self) -> SourceResult<Vec<Vec<String>>>;
}
