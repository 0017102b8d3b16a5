use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "loc-scout")]
#[command(author, version, about = "Find oversized source files by line count")]
#[command(long_about = "Walks the given roots, counts lines in files with matching \
    extensions and lists the files at or above a line threshold, largest first.\n\n\
    Files with equal line counts are listed by path, ascending.\n\n\
    Relative `roots` and `relative_to` in a config file are resolved against \
    the directory containing that file; paths given on the command line are \
    resolved against the current directory.\n\n\
    Exit codes:\n  \
    0 - Report printed (including when nothing matched)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Files or directories to scan [default: .]
    pub roots: Vec<PathBuf>,

    /// Minimum line count to report, inclusive [default: 1000]
    #[arg(long, allow_negative_numbers = true)]
    pub min_lines: Option<i64>,

    /// Maximum number of files to report [default: 30]
    #[arg(long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// File extensions to include (repeatable or comma-separated) [default: ts,tsx]
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Extra directory names to skip, added to the built-in list (repeatable)
    #[arg(long = "ignore-dir", value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// Show paths relative to this directory [default: current directory]
    #[arg(long)]
    pub relative_to: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
