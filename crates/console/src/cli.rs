use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "gildedrose",
    about = "Nightly inventory valuation - advances stock by whole days and reports it",
    version
)]
pub struct Cli {
    /// Number of days to simulate
    #[arg(short, long, default_value_t = 1)]
    pub days: u32,

    /// JSON file with the initial stock (defaults to the canonical shop stock)
    #[arg(short, long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Output format for the daily report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only report the item with this exact name
    #[arg(short, long, value_name = "NAME")]
    pub inspect: Option<String>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
