//! Benchpost - benchmark result post-processing
//!
//! A command line tool that post-processes the pipe-delimited result tables
//! emitted by the string-routine benchmark harness: merging two result
//! tables on (buffer size, routine implementation) and rendering
//! bandwidth-vs-buffer-size comparison charts.

use clap::Parser;

mod chart;
mod cli;
mod commands;
mod error;
mod table;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge(args) => commands::merge::run(args, cli.verbose),
        Commands::Plot(args) => commands::plot::run(args, cli.verbose),
        Commands::Bars(args) => commands::bars::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
