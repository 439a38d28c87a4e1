//! SQLite table export source.
//!
//! # Responsibility
//! - Read every row of one table in `rowid` order as raw string fields.
//! - Validate the configured table before the first read.
//!
//! # Invariants
//! - The column-name row is emitted first, so the loader's uniform header
//!   strip applies to table exports the same as to files.
//! - The table name must stay within the safe identifier set; it is
//!   interpolated into SQL and never taken from untrusted input unchecked.

use super::{RowSource, SourceError, SourceResult};
use rusqlite::types::Value;
use rusqlite::Connection;

/// Reads an ordered dataset from a single SQLite table.
pub struct SqliteTableSource<'conn> {
    conn: &'conn Connection,
    table: String,
}

impl<'conn> SqliteTableSource<'conn> {
    /// Creates a source after validating the table name and its existence.
    pub fn try_new(conn: &'conn Connection, table: impl Into<String>) -> SourceResult<Self> {
        let table = table.into();
        if !is_valid_table_name(&table) {
            return Err(SourceError::InvalidTableName(table));
        }

        let exists: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table.as_str()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SourceError::MissingTable(table));
        }

        Ok(Self { conn, table })
    }
}

impl RowSource for SqliteTableSource<'_> {
    fn location(&self) -> String {
        format!("sqlite:{}", self.table)
    }

    fn read_all(&self) -> SourceResult<Vec<Vec<String>>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} ORDER BY rowid;", self.table))?;

        let header: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let column_count = header.len();

        let mut raw_rows = vec![header];
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut fields = Vec::with_capacity(column_count);
            for column in 0..column_count {
                let value: Value = row.get(column)?;
                fields.push(value_to_field(value));
            }
            raw_rows.push(fields);
        }

        Ok(raw_rows)
    }
}

fn value_to_field(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(number) => number.to_string(),
        Value::Real(number) => number.to_string(),
        Value::Text(text) => text,
        Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

fn is_valid_table_name(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let mut chars = value.chars();
    let first_is_safe = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    first_is_safe
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_valid_table_name;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_valid_table_name("baby_names"));
        assert!(is_valid_table_name("_staging2"));
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("2024_export"));
        assert!(!is_valid_table_name("names; DROP TABLE names"));
        assert!(!is_valid_table_name("na-mes"));
    }
}
