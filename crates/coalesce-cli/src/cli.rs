use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "coalesce",
    about = "Merge overlapping closed integer intervals",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file (default: ./coalesce.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge intervals and print the result
    Merge(IntervalArgs),
    /// Check whether intervals are already merged
    Verify(IntervalArgs),
    /// Run the built-in reference cases
    Check(CheckArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct IntervalArgs {
    /// Interval literals such as `1,3`, `[2,6]` or `8..=10`.
    /// Write negative starts as `[-4,-1]` or pass them after `--`.
    pub intervals: Vec<String>,
    /// JSON file holding `[[start, end], ...]`; `-` reads stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {}

#[derive(Args)]
pub struct ConfigArgs {}
