//! Serializing result tables back to pipe-delimited text

use std::path::Path;

use crate::error::{BenchpostError, Result};
use crate::table::Table;

/// Write `table` to `path` as pipe-delimited text, header line first.
///
/// The table is serialized fully in memory and written in one shot, so a
/// serialization failure never leaves a partial output file behind.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let data = serialize_table(table)?;
    std::fs::write(path, data).map_err(|e| BenchpostError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Serialize `table` to pipe-delimited bytes; null cells become empty fields
pub fn serialize_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .from_writer(Vec::new());

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    writer
        .into_inner()
        .map_err(|e| BenchpostError::TableParseFailed {
            path: "<output>".to_string(),
            reason: e.to_string(),
        })
}
