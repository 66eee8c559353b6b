//! Configuration for the data stores.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ENERGY_ATLAS_DATA_DIR";

/// Environment variable overriding the number of concurrent file loads
pub const MAX_CONCURRENT_LOADS_ENV: &str = "ENERGY_ATLAS_MAX_CONCURRENT_LOADS";

/// What to do when an expected source file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// The whole load fails
    #[default]
    Fail,
    /// The file is logged and contributes no data
    Skip,
}

/// Where the source workbooks live and how they are loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Root directory; all other paths are relative to it
    pub data_dir: PathBuf,
    /// Directory of the municipal workbooks, relative to `data_dir`
    pub municipal_dir: PathBuf,
    /// Directory of the provincial workbooks, relative to `data_dir`
    pub provincial_dir: PathBuf,
    /// Extension of the workbook files
    pub extension: String,
    /// Upper bound on files fetched at the same time
    pub max_concurrent_loads: usize,
    /// Handling of absent files
    pub missing_files: MissingFilePolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            municipal_dir: PathBuf::from("municipal"),
            provincial_dir: PathBuf::from("provincial"),
            extension: "xlsx".to_string(),
            max_concurrent_loads: num_cpus::get(),
            missing_files: MissingFilePolicy::Fail,
        }
    }
}

impl DataConfig {
    /// Defaults, overridden by `ENERGY_ATLAS_DATA_DIR` and
    /// `ENERGY_ATLAS_MAX_CONCURRENT_LOADS` when set
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(limit) = std::env::var(MAX_CONCURRENT_LOADS_ENV)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            config.max_concurrent_loads = limit;
        }
        config
    }

    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub const fn with_max_concurrent_loads(mut self, limit: usize) -> Self {
        self.max_concurrent_loads = limit;
        self
    }

    #[must_use]
    pub const fn with_missing_files(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_files = policy;
        self
    }

    /// Concurrency limit, never below one
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_loads.max(1)
    }

    /// Relative path of a municipal workbook
    #[must_use]
    pub fn municipal_path(&self, file_name: &str) -> PathBuf {
        self.municipal_dir.join(file_name)
    }

    /// Relative path of a provincial workbook
    #[must_use]
    pub fn provincial_path(&self, file_name: &str) -> PathBuf {
        self.provincial_dir.join(file_name)
    }

    /// Absolute location of a relative source path
    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.data_dir.join(relative)
    }
}
