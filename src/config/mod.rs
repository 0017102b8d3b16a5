mod loader;
mod model;
mod options;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{
    Config, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_MIN_LINES, DEFAULT_TOP, ScanConfig,
};
pub use options::ScanOptions;
