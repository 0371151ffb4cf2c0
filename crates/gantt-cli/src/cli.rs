//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Render a spreadsheet of timed events as a Gantt-style PNG chart.
///
/// Every sheet of the workbook is one track. Row 0 is a header; following
/// rows hold start, end, name and color columns.
#[derive(Debug, Parser)]
#[command(name = "gantt", version, about, long_about = None)]
pub struct Cli {
    /// Path to the input workbook (xlsx, xls or ods).
    #[arg(long)]
    pub path: PathBuf,

    /// Width of the output image in pixels [default: 4000].
    #[arg(long)]
    pub width: Option<f64>,

    /// Output image path [default: out.png].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
