//!
//! The warmup summary arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The warmup summary arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Only prints errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input files.
    /// If only one path is provided and it is a directory, it is searched for JSON files.
    pub input_paths: Vec<PathBuf>,

    /// Inputs are summary records instead of raw results.
    #[arg(long)]
    pub from_summary: bool,

    /// Segment equivalence tolerance: a fraction or `N%` of the fastest segment mean, or `Ns` seconds.
    #[arg(long, default_value_t = warmup_summary::Delta::default())]
    pub delta: warmup_summary::Delta,

    /// Bootstrap quality: `low`, `medium`, or `high`.
    #[arg(long, default_value_t = warmup_summary::Quality::default())]
    pub quality: warmup_summary::Quality,

    /// Bootstrap resampler seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Report output format: `json`, `latex`, `html`, `xlsx`, or `terminal`.
    #[arg(long, default_value_t = warmup_summary::OutputFormat::Terminal)]
    pub output_format: warmup_summary::OutputFormat,

    /// Output file. Required for every format except `terminal`.
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Previous summary record to compare against.
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Only reports VMs whose names match the regular expression.
    #[arg(long)]
    pub vm_filter: Option<regex::Regex>,

    /// Writes a standalone LaTeX document.
    #[arg(long)]
    pub latex_preamble: bool,

    /// Uses a page-breaking LaTeX table.
    #[arg(long)]
    pub latex_longtable: bool,
}
