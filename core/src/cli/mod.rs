pub mod report;

use crate::types::{
    FilterConfig, LinkageConfig, DEFAULT_BIOPSY_WINDOW_DAYS, DEFAULT_MAMMO_MARKER,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for mammolink
#[derive(Parser, Debug)]
#[command(name = "mammolink")]
#[command(about = "Link mammography studies with biopsy and radiology outcomes")]
#[command(version)]
pub struct Cli {
    /// Imaging table (one row per image)
    #[arg(long, value_name = "CSV")]
    pub imaging: PathBuf,

    /// Biopsy report table; repeat to concatenate several exports
    #[arg(long, value_name = "CSV")]
    pub biopsy: Vec<PathBuf>,

    /// Radiology report table
    #[arg(long, value_name = "CSV")]
    pub radiology: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Days after a study within which a biopsy confirms it
    #[arg(long, default_value_t = DEFAULT_BIOPSY_WINDOW_DAYS)]
    pub window_days: i64,

    /// Text a radiology report must contain to count as a mammography report
    #[arg(long, default_value = DEFAULT_MAMMO_MARKER)]
    pub mammo_marker: String,

    /// Keep outlier images (magnified, implant, for-processing, ...)
    #[arg(long)]
    pub permissive: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the linkage configuration selected by the flags
    pub fn linkage_config(&self) -> LinkageConfig {
        let filter = if self.permissive {
            FilterConfig::permissive()
        } else {
            FilterConfig::default()
        };
        LinkageConfig::default()
            .with_filter(filter)
            .with_biopsy_window_days(self.window_days)
            .with_mammo_marker(self.mammo_marker.as_str())
    }
}

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Classified study table as CSV
    Csv,
    /// Classified study table as JSON (requires the `json` feature)
    Json,
    /// Human-readable run summary
    Text,
}
