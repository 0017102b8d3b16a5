pub mod scan;

pub use scan::{apply_cli_overrides, collect_files, run_scan, run_scan_impl};
