//! Outer-join merge of two result tables
//!
//! Joins on the composite key (buffer size, routine implementation),
//! coalesces measurement columns present in both inputs left-biased, drops
//! derived columns that are meaningless after recombination, and re-sorts
//! the result deterministically.

use std::collections::HashMap;

use crate::error::Result;
use crate::table::{BUF_SIZE_COLUMN, IMPLEMENTATION_COLUMN, Table};

/// Tuning knobs for [`merge`]
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Derived columns dropped from each input before joining; absent
    /// columns are ignored
    pub drop_columns: Vec<String>,
    /// Column-name suffixes marking per-source delta columns, dropped from
    /// the merged output
    pub delta_suffixes: Vec<String>,
    /// Implementations containing this substring sort before all others
    /// within one buffer size
    pub primary_marker: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            drop_columns: vec!["SPEEDUP".to_string()],
            delta_suffixes: vec!["_d".to_string()],
            primary_marker: "LI-PaRAD".to_string(),
        }
    }
}

impl MergeOptions {
    fn is_delta_column(&self, name: &str) -> bool {
        self.delta_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// Composite row key: parsed byte count plus implementation name
type RowKey = (u64, String);

/// One input table indexed by row key
struct KeyedTable<'a> {
    table: &'a Table,
    buf_col: usize,
    impl_col: usize,
    /// Key order as first seen; duplicate keys keep the first row
    keys: Vec<RowKey>,
    by_key: HashMap<RowKey, usize>,
}

impl<'a> KeyedTable<'a> {
    fn index(table: &'a Table, label: &str) -> Result<Self> {
        let buf_col = table.require_column(BUF_SIZE_COLUMN, label)?;
        let impl_col = table.require_column(IMPLEMENTATION_COLUMN, label)?;

        let mut keys = Vec::with_capacity(table.rows.len());
        let mut by_key = HashMap::with_capacity(table.rows.len());
        for (idx, _) in table.rows.iter().enumerate() {
            let buf = Table::parse_buf_size(table.cell(idx, buf_col).unwrap_or(""))?;
            let implementation = table.cell(idx, impl_col).unwrap_or("").to_string();
            let key = (buf, implementation);
            if !by_key.contains_key(&key) {
                keys.push(key.clone());
                by_key.insert(key, idx);
            }
        }

        Ok(Self {
            table,
            buf_col,
            impl_col,
            keys,
            by_key,
        })
    }

    /// Measurement columns in input order (everything but the key columns)
    fn measurement_columns(&self) -> impl Iterator<Item = &String> {
        self.table
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != self.buf_col && *idx != self.impl_col)
            .map(|(_, name)| name)
    }

    /// Cell for a keyed row and column name, `None` when either is absent
    fn value(&self, key: &RowKey, column: &str) -> Option<&str> {
        let row = *self.by_key.get(key)?;
        let col = self.table.column_index(column)?;
        self.table.cell(row, col)
    }
}

/// Outer-join `left` and `right` on (buffer size, implementation).
///
/// For measurement columns present in both inputs, `left`'s value wins
/// whenever both sides report one. Rows sort by ascending buffer size;
/// within one buffer size, primary-family implementations come first and
/// the remaining rows keep their relative input order.
pub fn merge(left: &Table, right: &Table, opts: &MergeOptions) -> Result<Table> {
    let mut left = left.clone();
    let mut right = right.clone();
    for column in &opts.drop_columns {
        left.drop_column(column);
        right.drop_column(column);
    }

    let left = KeyedTable::index(&left, "first input")?;
    let right = KeyedTable::index(&right, "second input")?;

    // Key columns first, then left's measurement columns, then right's
    // exclusive ones; delta columns never survive the merge
    let mut columns = vec![
        BUF_SIZE_COLUMN.to_string(),
        IMPLEMENTATION_COLUMN.to_string(),
    ];
    for name in left.measurement_columns() {
        if !opts.is_delta_column(name) {
            columns.push(name.clone());
        }
    }
    for name in right.measurement_columns() {
        if !columns.iter().any(|c| c == name) && !opts.is_delta_column(name) {
            columns.push(name.clone());
        }
    }

    // Union of keys: left's in order, then right's exclusive ones
    let mut keys = left.keys.clone();
    for key in &right.keys {
        if !left.by_key.contains_key(key) {
            keys.push(key.clone());
        }
    }

    // Primary-family rows rank before the rest; the sort is stable so
    // equal-ranked rows keep their relative order
    keys.sort_by_key(|(buf, implementation)| {
        let rank = u8::from(!implementation.contains(&opts.primary_marker));
        (*buf, rank)
    });

    let mut merged = Table::new(columns);
    for key in &keys {
        let (buf, implementation) = key;
        let mut row: Vec<Option<String>> = vec![
            Some(buf.to_string()),
            Some(implementation.clone()),
        ];
        for column in merged.columns.iter().skip(2) {
            let value = left
                .value(key, column)
                .or_else(|| right.value(key, column))
                .map(str::to_string);
            row.push(value);
        }
        merged.rows.push(row);
    }

    Ok(merged)
}
