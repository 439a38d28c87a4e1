//! Delimited text file source.
//!
//! # Responsibility
//! - Read a whole delimited export (comma by default) into raw rows.
//! - Handle quoted fields so embedded delimiters and newlines survive.
//!
//! # Invariants
//! - Rows come back in file order; the header line is row zero.
//! - The file is read in one pass; the source holds no open handle between
//!   calls.

use super::{RowSource, SourceError, SourceResult};
use std::mem;
use std::path::PathBuf;

/// Reads an ordered dataset from a delimited text file.
pub struct DelimitedFileSource {
    path: PathBuf,
    delimiter: char,
}

impl DelimitedFileSource {
    /// Creates a comma-delimited source for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_delimiter(path, ',')
    }

    /// Creates a source with a caller-chosen field delimiter.
    pub fn with_delimiter(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

impl RowSource for DelimitedFileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> SourceResult<Vec<Vec<String>>> {
        let content = std::fs::read_to_string(&self.path).map_err(|cause| SourceError::Io {
            location: self.path.display().to_string(),
            cause,
        })?;
        Ok(parse_rows(&content, self.delimiter))
    }
}

/// Splits delimited content into rows of fields.
///
/// Quote handling: a field wrapped in double quotes may contain the
/// delimiter, newlines, and doubled quotes (`""` decodes to `"`). Carriage
/// returns outside quotes are dropped, so CRLF files parse like LF files.
/// Blank lines produce no row.
fn parse_rows(content: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line_has_data = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                line_has_data = true;
            }
            '\r' => {}
            '\n' => {
                if line_has_data {
                    row.push(mem::take(&mut field));
                    rows.push(mem::take(&mut row));
                } else {
                    field.clear();
                    row.clear();
                }
                line_has_data = false;
            }
            c if c == delimiter => {
                row.push(mem::take(&mut field));
                line_has_data = true;
            }
            c => {
                field.push(c);
                line_has_data = true;
            }
        }
    }

    if line_has_data {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::parse_rows;

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|field| field.to_string()).collect())
            .collect()
    }

    #[test]
    fn parses_plain_rows() {
        let parsed = parse_rows("rank,name\n1,Olivia\n2,Liam\n", ',');
        assert_eq!(
            parsed,
            owned(&[&["rank", "name"], &["1", "Olivia"], &["2", "Liam"]])
        );
    }

    #[test]
    fn quoted_field_keeps_embedded_delimiter() {
        let parsed = parse_rows("name,borough\n\"Smith, Jr.\",Queens\n", ',');
        assert_eq!(parsed[1], vec!["Smith, Jr.".to_string(), "Queens".to_string()]);
    }

    #[test]
    fn doubled_quote_decodes_to_single_quote() {
        let parsed = parse_rows("\"say \"\"hi\"\"\",x\n", ',');
        assert_eq!(parsed[0][0], "say \"hi\"");
    }

    #[test]
    fn quoted_field_keeps_embedded_newline() {
        let parsed = parse_rows("\"line one\nline two\",x\n", ',');
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0][0], "line one\nline two");
    }

    #[test]
    fn crlf_endings_parse_like_lf() {
        let parsed = parse_rows("a,b\r\nc,d\r\n", ',');
        assert_eq!(parsed, owned(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn blank_lines_and_missing_final_newline_are_handled() {
        let parsed = parse_rows("a,b\n\n\nc,d", ',');
        assert_eq!(parsed, owned(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn alternate_delimiter_is_honored() {
        let parsed = parse_rows("a;b;c\n1;2;3\n", ';');
        assert_eq!(parsed, owned(&[&["a", "b", "c"], &["1", "2", "3"]]));
    }

    #[test]
    fn empty_content_yields_no_rows() {
        assert!(parse_rows("", ',').is_empty());
        assert!(parse_rows("\n\n", ',').is_empty());
    }

    #[test]
    fn trailing_empty_field_is_preserved() {
        let parsed = parse_rows("a,\n", ',');
        assert_eq!(parsed, owned(&[&["a", ""]]));
    }
}
