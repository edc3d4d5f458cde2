//! In-memory representation of pipe-delimited benchmark result tables
//!
//! Tables have an open schema: beyond the two key columns that identify a
//! measurement row, the set of measurement columns varies per result file and
//! is carried as-is.

pub mod merge;
pub mod reader;
pub mod writer;

pub use merge::{MergeOptions, merge};
pub use reader::read_table;
pub use writer::write_table;

use crate::error::{BenchpostError, Result};

/// Key column holding the buffer size under test, in bytes
pub const BUF_SIZE_COLUMN: &str = "BUF SIZE B";

/// Key column naming the routine implementation variant
pub const IMPLEMENTATION_COLUMN: &str = "ROUTINE IMPLEMENTATION";

/// One result table: ordered column names and rows of optional cells.
///
/// `None` cells are nulls, either empty fields in the source file or values
/// absent after an outer join.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column that must exist; `path` names the source file
    /// for the error message
    pub fn require_column(&self, name: &str, path: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| BenchpostError::MissingColumn {
                column: name.to_string(),
                path: path.to_string(),
            })
    }

    /// Cell value at (row, column), `None` for nulls
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).and_then(|c| c.as_deref())
    }

    /// Remove a column and its cells; no-op when the column is absent
    pub fn drop_column(&mut self, name: &str) {
        if let Some(idx) = self.column_index(name) {
            self.columns.remove(idx);
            for row in &mut self.rows {
                if idx < row.len() {
                    row.remove(idx);
                }
            }
        }
    }

    /// Parse a `BUF SIZE B` cell into a byte count
    pub fn parse_buf_size(value: &str) -> Result<u64> {
        value
            .parse::<u64>()
            .map_err(|_| BenchpostError::InvalidBufSize {
                column: BUF_SIZE_COLUMN.to_string(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            columns: vec![
                BUF_SIZE_COLUMN.to_string(),
                IMPLEMENTATION_COLUMN.to_string(),
                "BW AVG GiB/s".to_string(),
            ],
            rows: vec![
                vec![
                    Some("64".to_string()),
                    Some("memcpy_current".to_string()),
                    Some("10.2".to_string()),
                ],
                vec![
                    Some("128".to_string()),
                    Some("memcpy_current".to_string()),
                    None,
                ],
            ],
        }
    }

    #[test]
    fn test_column_index() {
        let t = sample();
        assert_eq!(t.column_index(BUF_SIZE_COLUMN), Some(0));
        assert_eq!(t.column_index("BW AVG GiB/s"), Some(2));
        assert_eq!(t.column_index("SPEEDUP"), None);
    }

    #[test]
    fn test_require_column_missing() {
        let t = sample();
        let err = t.require_column("SPEEDUP", "a.txt").unwrap_err();
        assert!(matches!(err, BenchpostError::MissingColumn { .. }));
        assert!(err.to_string().contains("a.txt"));
    }

    #[test]
    fn test_cell_null_and_out_of_range() {
        let t = sample();
        assert_eq!(t.cell(0, 2), Some("10.2"));
        assert_eq!(t.cell(1, 2), None);
        assert_eq!(t.cell(9, 0), None);
    }

    #[test]
    fn test_drop_column() {
        let mut t = sample();
        t.drop_column("BW AVG GiB/s");
        assert_eq!(t.columns.len(), 2);
        assert_eq!(t.rows[0].len(), 2);

        // Absent column is a no-op
        t.drop_column("BW AVG GiB/s");
        assert_eq!(t.columns.len(), 2);
    }

    #[test]
    fn test_parse_buf_size() {
        assert_eq!(Table::parse_buf_size("64").unwrap(), 64);
        assert_eq!(Table::parse_buf_size("1048576").unwrap(), 1_048_576);
        assert!(Table::parse_buf_size("8.0 KiB").is_err());
        assert!(Table::parse_buf_size("").is_err());
    }
}
