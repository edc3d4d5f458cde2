//! Chart construction from result tables
//!
//! Charts are emitted as standalone HTML documents rendering client-side
//! with ECharts; there is no static image export.

pub mod bandwidth;
pub mod bars;
pub mod target;

use std::path::Path;

use charming::{Chart, HtmlRenderer};

use crate::error::{BenchpostError, Result};
use crate::table::{BUF_SIZE_COLUMN, IMPLEMENTATION_COLUMN, Table};

/// Measurement column holding the average bandwidth
pub const BW_AVG_COLUMN: &str = "BW AVG GiB/s";

/// Measurement column holding the bandwidth standard deviation
pub const BW_STDEV_COLUMN: &str = "BW STDEV GiB/s";

/// One measurement point of a bandwidth series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub buf_bytes: u64,
    pub bw_avg: f64,
    pub bw_stdev: Option<f64>,
}

/// Bandwidth of one implementation over buffer sizes
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub implementation: String,
    pub points: Vec<Point>,
}

/// Group a result table into one bandwidth series per implementation.
///
/// Rows with a null average bandwidth are skipped; an outer-joined table has
/// such rows for buffer sizes one of its sources did not measure.
pub fn bandwidth_series(table: &Table, path: &str) -> Result<Vec<Series>> {
    let impl_col = table.require_column(IMPLEMENTATION_COLUMN, path)?;
    let buf_col = table.require_column(BUF_SIZE_COLUMN, path)?;
    let avg_col = table.require_column(BW_AVG_COLUMN, path)?;
    let stdev_col = table.column_index(BW_STDEV_COLUMN);

    let mut series: Vec<Series> = Vec::new();
    for row in 0..table.rows.len() {
        let Some(avg) = table.cell(row, avg_col) else {
            continue;
        };
        let implementation = table.cell(row, impl_col).unwrap_or("").to_string();
        let point = Point {
            buf_bytes: Table::parse_buf_size(table.cell(row, buf_col).unwrap_or(""))?,
            bw_avg: parse_measurement(avg, BW_AVG_COLUMN, path)?,
            bw_stdev: match stdev_col.and_then(|col| table.cell(row, col)) {
                Some(value) => Some(parse_measurement(value, BW_STDEV_COLUMN, path)?),
                None => None,
            },
        };

        match series.iter().position(|s| s.implementation == implementation) {
            Some(pos) => series[pos].points.push(point),
            None => series.push(Series {
                implementation,
                points: vec![point],
            }),
        }
    }

    if series.is_empty() {
        return Err(BenchpostError::NoPlotData {
            path: path.to_string(),
        });
    }

    Ok(series)
}

fn parse_measurement(value: &str, column: &str, path: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| BenchpostError::TableParseFailed {
            path: path.to_string(),
            reason: format!("unparseable '{column}' value '{value}'"),
        })
}

/// Human-readable byte count for axis labels, e.g. `64 B`, `32 KiB`
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Render `chart` into a standalone HTML document at `path`
pub fn save_html(chart: &Chart, title: &str, width: u64, height: u64, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BenchpostError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }

    HtmlRenderer::new(title, width, height)
        .save(chart, path)
        .map_err(|e| BenchpostError::ChartRenderFailed {
            reason: format!("{e:?}"),
        })
}
