use std::path::PathBuf;

use clap::Parser;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_DATA_FILE: &str = "earthquake.csv";

/// Start-up options. Log verbosity is set through `RUST_LOG`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "quake-explorer",
    version,
    about = "Earthquake & tsunami data explorer"
)]
pub struct Config {
    /// Earthquake table (.csv, .tsv, .json or .parquet)
    #[arg(value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Year selected at start-up instead of the latest one
    #[arg(long)]
    pub year: Option<i32>,
}
