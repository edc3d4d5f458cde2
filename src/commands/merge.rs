//! Merge command implementation
//!
//! Reads two result tables, outer-joins them on (buffer size,
//! implementation) and writes the merged table. The first input's values
//! win for measurement columns present in both.

use console::Style;

use crate::cli::MergeArgs;
use crate::error::Result;
use crate::table::{self, MergeOptions};

/// Run merge command
pub fn run(args: MergeArgs, verbose: bool) -> Result<()> {
    let left = table::read_table(&args.input1)?;
    let right = table::read_table(&args.input2)?;

    if verbose {
        println!(
            "Read {} rows from {}, {} rows from {}",
            left.rows.len(),
            args.input1.display(),
            right.rows.len(),
            args.input2.display()
        );
    }

    let opts = MergeOptions {
        drop_columns: vec![args.drop_column],
        delta_suffixes: args.delta_suffix,
        primary_marker: args.primary_marker,
    };
    let merged = table::merge(&left, &right, &opts)?;

    table::write_table(&merged, &args.output)?;

    println!(
        "{} {} rows, {} columns -> {}",
        Style::new().bold().green().apply_to("Merged:"),
        merged.rows.len(),
        merged.columns.len(),
        args.output.display()
    );

    Ok(())
}
