use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::shared::path::StorageLayout;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    pub data_dir: String,
    /// Relative to `data_dir` unless absolute
    pub column_dir: String,
    /// Relative to `data_dir` unless absolute
    pub index_dir: String,
    #[serde(default = "default_empty_data_symbol")]
    pub empty_data_symbol: String,
    #[serde(default)]
    pub parallel_index_reads: bool,
}

fn default_empty_data_symbol() -> String {
    "M".to_string()
}

impl EngineConfig {
    pub fn storage_layout(&self) -> StorageLayout {
        let root = PathBuf::from(&self.data_dir);
        StorageLayout::new(root.join(&self.column_dir), root.join(&self.index_dir))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    pub input_path: String,
    pub memory_output_path: String,
    pub disk_output_path: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("COL_DB_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
