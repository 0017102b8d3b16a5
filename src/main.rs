use clap::Parser;

use loc_scout::cli::Cli;
use loc_scout::commands::run_scan;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_scan(&cli));
}
