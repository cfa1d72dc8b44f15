use std::path::PathBuf;
use thiserror::Error;

use super::ConfigFormat;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unsupported config file extension: {0} (expected .yaml or .json)")]
    UnsupportedConfigFileExtension(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {format} config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("key '{key}' does not exist in config (missing segment '{segment}')")]
    NonexistentKey { key: String, segment: String },

    #[error("parameter '{0}' does not exist in config")]
    NonexistentParameter(String),
}
