//! Command implementations for the benchpost CLI

pub mod bars;
pub mod completions;
pub mod merge;
pub mod plot;
pub mod version;

use std::path::{Path, PathBuf};

/// Default chart location for an input table, mirroring the harness
/// results layout: `results/plots/<input stem>.html`
pub fn default_chart_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "chart".to_string(), |s| s.to_string_lossy().into_owned());
    PathBuf::from("results/plots").join(format!("{stem}.html"))
}
