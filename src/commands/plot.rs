//! Plot command implementation
//!
//! Renders a bandwidth-vs-buffer-size line chart for one result table.

use console::Style;

use crate::chart::bandwidth::{BandwidthMeta, bandwidth_chart};
use crate::chart::{bandwidth_series, save_html};
use crate::cli::PlotArgs;
use crate::commands::default_chart_path;
use crate::error::Result;
use crate::table;

/// Run plot command
pub fn run(args: PlotArgs, verbose: bool) -> Result<()> {
    let input = table::read_table(&args.input)?;
    let series = bandwidth_series(&input, &args.input.display().to_string())?;

    if verbose {
        for s in &series {
            println!("{}: {} points", s.implementation, s.points.len());
        }
    }

    let meta = BandwidthMeta {
        routine: args.routine,
        target: args.target,
        aligned_alloc: args.aligned_alloc,
        full_sizes: args.full_sizes,
    };
    let chart = bandwidth_chart(&series, &meta);

    let output = args
        .output
        .unwrap_or_else(|| default_chart_path(&args.input));
    let title = format!("Average Bandwidth of `{}`", args.routine.as_str());
    save_html(&chart, &title, 1400, 900, &output)?;

    println!(
        "{} {} implementations -> {}",
        Style::new().bold().green().apply_to("Plotted:"),
        series.len(),
        output.display()
    );

    Ok(())
}
