//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Benchpost - benchmark result post-processing
///
/// Merge pipe-delimited benchmark result tables and render bandwidth charts.
#[derive(Parser, Debug)]
#[command(
    name = "benchpost",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Post-processing for string-routine benchmark results",
    long_about = "Benchpost post-processes the pipe-delimited result tables emitted by the \
                  string-routine benchmark harness: it merges two result tables on \
                  (buffer size, routine implementation) and renders bandwidth-vs-buffer-size \
                  comparison charts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  benchpost merge run_a.txt run_b.txt merged.txt\n    \
                  benchpost plot -i merged.txt -r memcpy -t G3 --full-sizes\n    \
                  benchpost bars -i merged.txt -o memcpy_bars.html\n    \
                  benchpost completions --shell zsh"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge two result tables on (buffer size, implementation)
    Merge(MergeArgs),

    /// Render a bandwidth-vs-buffer-size line chart
    Plot(PlotArgs),

    /// Render a grouped bandwidth bar chart
    Bars(BarsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Merge two runs of the same routine:\n    benchpost merge small_sizes.txt full_sizes.txt merged.txt\n\n\
                  Keep a custom derived column out of the result:\n    benchpost merge a.txt b.txt out.txt --drop-column 'RT SPEEDUP'\n\n\
                  Recognize an extra delta suffix:\n    benchpost merge a.txt b.txt out.txt --delta-suffix _d --delta-suffix _delta")]
pub struct MergeArgs {
    /// First input table (its values win for overlapping columns)
    pub input1: PathBuf,

    /// Second input table
    pub input2: PathBuf,

    /// Output path for the merged table
    pub output: PathBuf,

    /// Derived column to drop from each input before joining
    #[arg(long, value_name = "COLUMN", default_value = "SPEEDUP")]
    pub drop_column: String,

    /// Column-name suffix marking per-source delta columns (repeatable)
    #[arg(long, value_name = "SUFFIX", default_values = ["_d"], num_args = 1..)]
    pub delta_suffix: Vec<String>,

    /// Substring marking the primary implementation family, sorted first
    #[arg(long, value_name = "MARKER", default_value = "LI-PaRAD")]
    pub primary_marker: String,
}

/// Target hardware for cache-level markers
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    #[value(name = "G3")]
    G3,
    #[value(name = "G3E")]
    G3E,
    #[value(name = "A64FX")]
    A64fx,
    #[value(name = "Grace")]
    Grace,
    #[value(name = "Rhea1")]
    Rhea1,
}

/// Benchmarked routine, used for chart titles
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routine {
    Memcpy,
    Strcpy,
    Strncpy,
    Memcmp,
    Strcmp,
    Strncmp,
    Strchr,
    Strrchr,
    Strlen,
    Strnlen,
}

impl Routine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Routine::Memcpy => "memcpy",
            Routine::Strcpy => "strcpy",
            Routine::Strncpy => "strncpy",
            Routine::Memcmp => "memcmp",
            Routine::Strcmp => "strcmp",
            Routine::Strncmp => "strncmp",
            Routine::Strchr => "strchr",
            Routine::Strrchr => "strrchr",
            Routine::Strlen => "strlen",
            Routine::Strnlen => "strnlen",
        }
    }
}

/// Arguments for the plot command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Plot a merged table for Graviton3:\n    benchpost plot -i merged.txt -r memcpy -t G3 --full-sizes\n\n\
                  Plot an aligned-allocation run:\n    benchpost plot -i memcpy_aligned.txt -r memcpy -t Grace --aligned-alloc\n\n\
                  Write the chart next to the input:\n    benchpost plot -i strlen.txt -r strlen -o strlen.html")]
pub struct PlotArgs {
    /// Input result table
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Output HTML file (defaults to results/plots/<input stem>.html)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Routine name shown in the chart title
    #[arg(long, short = 'r', value_enum)]
    pub routine: Routine,

    /// Target hardware, enables cache-size markers
    #[arg(long, short = 't', value_enum)]
    pub target: Option<Target>,

    /// Mark the run as using aligned allocations
    #[arg(long = "aligned-alloc")]
    pub aligned_alloc: bool,

    /// Full-size run: log x-axis and cache-level markers
    #[arg(long = "full-sizes")]
    pub full_sizes: bool,
}

/// Arguments for the bars command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Grouped bars per buffer size:\n    benchpost bars -i merged.txt\n\n\
                  Explicit output path:\n    benchpost bars -i merged.txt -o merged_bars.html")]
pub struct BarsArgs {
    /// Input result table
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Output HTML file (defaults to results/plots/<input stem>.html)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    benchpost completions --shell bash > ~/.bash_completion.d/benchpost\n\n\
                  Generate zsh completions:\n    benchpost completions --shell zsh > ~/.zfunc/_benchpost\n\n\
                  Generate fish completions:\n    benchpost completions --shell fish > ~/.config/fish/completions/benchpost.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
