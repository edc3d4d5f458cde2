//! Bars command implementation
//!
//! Renders a grouped bar chart comparing per-buffer-size bandwidth across
//! implementations.

use console::Style;

use crate::chart::bars::bars_chart;
use crate::chart::{bandwidth_series, save_html};
use crate::cli::BarsArgs;
use crate::commands::default_chart_path;
use crate::error::Result;
use crate::table;

/// Run bars command
pub fn run(args: BarsArgs, verbose: bool) -> Result<()> {
    let input = table::read_table(&args.input)?;
    let series = bandwidth_series(&input, &args.input.display().to_string())?;

    if verbose {
        for s in &series {
            println!("{}: {} points", s.implementation, s.points.len());
        }
    }

    // Chart is titled after the input file, like the routine-named result
    // files the harness produces
    let source_name = args
        .input
        .file_stem()
        .map_or_else(|| "results".to_string(), |s| s.to_string_lossy().into_owned());
    let chart = bars_chart(&series, &source_name);

    let output = args
        .output
        .unwrap_or_else(|| default_chart_path(&args.input));
    let title = format!("Comparative bandwidth performance of `{source_name}`");
    save_html(&chart, &title, 1024, 800, &output)?;

    println!(
        "{} {} implementations -> {}",
        Style::new().bold().green().apply_to("Plotted:"),
        series.len(),
        output.display()
    );

    Ok(())
}
