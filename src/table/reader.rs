//! Reading pipe-delimited result tables
//!
//! The benchmark harness pads fields for terminal readability and emits
//! `--`-prefixed separator lines between measurement blocks. Separator lines
//! are filtered in memory before parsing; the input file is never rewritten.

use std::path::Path;

use crate::error::{BenchpostError, Result};
use crate::table::Table;

/// Lines starting with this prefix are harness table dividers, not data
const SEPARATOR_PREFIX: &str = "--";

/// Read a result table from `path`
pub fn read_table(path: &Path) -> Result<Table> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BenchpostError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => BenchpostError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    parse_table(&raw, &path.display().to_string())
}

/// Parse table text after separator-line filtering
pub fn parse_table(raw: &str, path: &str) -> Result<Table> {
    let filtered: String = raw
        .lines()
        .filter(|line| !line.starts_with(SEPARATOR_PREFIX))
        .collect::<Vec<_>>()
        .join("\n");

    if filtered.trim().is_empty() {
        return Err(BenchpostError::EmptyTable {
            path: path.to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(filtered.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| BenchpostError::TableParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| BenchpostError::TableParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let mut row: Vec<Option<String>> = record
            .iter()
            .take(table.columns.len())
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        // Harness rows without a trailing field (e.g. no SPEEDUP on the
        // baseline row) are padded with nulls
        row.resize(table.columns.len(), None);
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{BUF_SIZE_COLUMN, IMPLEMENTATION_COLUMN};

    const SAMPLE: &str = "\
ROUTINE IMPLEMENTATION |  BUF SIZE B | BW AVG GiB/s | SPEEDUP
-----------------------------------------------------------
   memcpy_aarch64_sve  |          64 |       10.200 |
   memcpy_LI-PaRAD_v1  |          64 |       12.600 |  +23.53%
";

    #[test]
    fn test_parse_strips_separators_and_trims() {
        let t = parse_table(SAMPLE, "sample.txt").unwrap();
        assert_eq!(
            t.columns,
            vec![IMPLEMENTATION_COLUMN, BUF_SIZE_COLUMN, "BW AVG GiB/s", "SPEEDUP"]
        );
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.cell(0, 0), Some("memcpy_aarch64_sve"));
        assert_eq!(t.cell(0, 1), Some("64"));
        assert_eq!(t.cell(1, 3), Some("+23.53%"));
    }

    #[test]
    fn test_parse_empty_fields_are_null() {
        let t = parse_table(SAMPLE, "sample.txt").unwrap();
        assert_eq!(t.cell(0, 3), None);
    }

    #[test]
    fn test_parse_short_rows_padded() {
        let raw = "A | B | C\n1 | 2\n";
        let t = parse_table(raw, "short.txt").unwrap();
        assert_eq!(t.rows[0], vec![Some("1".to_string()), Some("2".to_string()), None]);
    }

    #[test]
    fn test_parse_separator_only_input_is_empty() {
        let raw = "----\n--------\n";
        let err = parse_table(raw, "empty.txt").unwrap_err();
        assert!(matches!(err, BenchpostError::EmptyTable { .. }));
    }

    #[test]
    fn test_read_table_missing_file() {
        let err = read_table(Path::new("/nonexistent/results.txt")).unwrap_err();
        assert!(matches!(err, BenchpostError::FileNotFound { .. }));
    }
}
