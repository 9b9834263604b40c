//! Command-line surface (spec §6), a `clap::Parser` derive struct.

use crate::diff::SearchMethod;
use crate::writer::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// Differential comparator for classic PCAP capture files.
#[derive(Debug, Parser)]
#[command(name = "pcap-diff", version, about)]
pub struct Cli {
    /// Filename for file A
    pub file_a: PathBuf,

    /// Filename for file B
    pub file_b: PathBuf,

    /// Maximum number of packets to load per file (0 = unlimited)
    #[arg(short = 'n', long = "max-packets", default_value_t = 0)]
    pub max_packets: u64,

    /// Diff byte mask: '0'/'1' characters only
    #[arg(short = 'm', long = "byte-mask", default_value = "")]
    pub byte_mask: String,

    /// Diff byte range for packets in file A
    #[arg(short = 'a', long = "range-a", default_value = "[:]")]
    pub range_a: String,

    /// Diff byte range for packets in file B
    #[arg(short = 'b', long = "range-b", default_value = "[:]")]
    pub range_b: String,

    /// Automatically align timestamps (currently unsupported)
    #[arg(short = 'A', long = "auto-time-align")]
    pub auto_time_align: bool,

    /// Offset applied to file A timestamps, in seconds
    #[arg(short = 't', long = "time-offset-a", default_value_t = 0.0)]
    pub time_offset_a: f64,

    /// Offset applied to file B timestamps, in seconds
    #[arg(short = 'T', long = "time-offset-b", default_value_t = 0.0)]
    pub time_offset_b: f64,

    /// Maximum negative time difference for a timestamp-search match
    #[arg(short = 'd', long = "neg-time-diff", default_value_t = 0.01)]
    pub neg_time_diff: f64,

    /// Maximum positive time difference for a timestamp-search match
    #[arg(short = 'D', long = "pos-time-diff", default_value_t = 0.01)]
    pub pos_time_diff: f64,

    /// Packet search method. Long-only: the original's short `-m` collides
    /// with `--byte-mask`, which keeps it (spec §6 open question).
    #[arg(long = "search-method", value_enum, default_value = "timestamp")]
    pub search_method: SearchMethod,

    /// Output capture format
    #[arg(short = 'f', long = "output-format", value_enum, default_value = "basic")]
    pub output_format: OutputMode,

    /// Output capture filename
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
