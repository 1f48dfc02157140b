use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{InvalidDateArg, OutputFormat};

/// Rename class recordings from Zoom-style GMT names to "<date> - <class>" names
#[derive(Parser, Debug)]
#[command(name = "recname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// Arguments shared by commands that walk a recordings tree
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Root directory holding one subdirectory per class (defaults from config, then ".")
    pub root: Option<PathBuf>,

    /// What to do when a GMT token holds an impossible date (defaults from config)
    #[arg(long, value_enum)]
    pub on_invalid_date: Option<InvalidDateArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every recording under the root directory
    Rename {
        #[command(flatten)]
        walk: WalkArgs,

        /// Show what would be renamed without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the renames that `rename` would perform (same as `rename --dry-run`)
    Plan {
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
