use std::path::PathBuf;

use log::LevelFilter;

pub const DEFAULT_STORE_FILE: &str = "hotels.json";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "hotel_records.log";

pub const STORE_ENV: &str = "HOTEL_RECORDS_STORE";
pub const LOG_DIR_ENV: &str = "HOTEL_RECORDS_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Where the hotel documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Store file at `path`; a missing `.json` extension is appended.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut path = path.into();
        if path.extension().is_none_or(|ext| ext != "json") {
            let mut name = path.clone().into_os_string();
            name.push(".json");
            path = PathBuf::from(name);
        }

        Self { path }
    }

    /// Reads `HOTEL_RECORDS_STORE`, falling back to `hotels.json`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(STORE_ENV).unwrap_or_else(|_| DEFAULT_STORE_FILE.to_string()))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub log_dir: PathBuf,
    pub log_file: String,
}

impl LogConfig {
    /// Level from `RUST_LOG` (RUST_LOG=debug or RUST_LOG=warn), directory from
    /// `HOTEL_RECORDS_LOG_DIR`. Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_LEVEL_ENV).ok().and_then(|l| l.parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info);
        let log_dir = std::env::var(LOG_DIR_ENV).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));

        Self { level, log_dir, log_file: DEFAULT_LOG_FILE.to_string() }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LevelFilter::Info, log_dir: PathBuf::from(DEFAULT_LOG_DIR), log_file: DEFAULT_LOG_FILE.to_string() }
    }
}
