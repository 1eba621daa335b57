use clap::Parser;
use mediasort_core::OperationMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mediasort")]
#[command(author, version, about = "Sort loose video files into a Movies / TV Shows library")]
pub struct Cli {
    /// Directory to scan for video files
    #[arg(long, default_value = ".")]
    pub source: PathBuf,

    /// Root of the library layout
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// How to relocate files: move, copy or symlink
    #[arg(long = "op", default_value = "move")]
    pub op: OperationMode,

    /// Show what would be done without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
}
