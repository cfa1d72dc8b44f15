//! File-based configuration loading.

use std::fmt;
use std::path::Path;

use super::{ConfigError, ConfigTree};

/// Format of a configuration file, chosen by its extension.
///
/// Matching is case-sensitive: only `.yaml` and `.json` are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Determines the format of `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedConfigFileExtension(
                path.to_path_buf(),
            )),
        }
    }

    /// Parses `contents` as a document of this format.
    ///
    /// YAML merge keys (`<<: *anchor`) are expanded before conversion.
    fn parse(
        self,
        contents: &str,
    ) -> Result<ConfigTree, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Self::Yaml => {
                let mut value: serde_yaml::Value = serde_yaml::from_str(contents)?;
                value.apply_merge()?;
                Ok(serde_yaml::from_value(value)?)
            }
            Self::Json => Ok(serde_json::from_str(contents)?),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("YAML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

/// Loads and parses a YAML or JSON config file.
///
/// The extension is checked before the file is opened, so an unsupported
/// extension is reported even when the file does not exist. Every call
/// reads the file again; nothing is cached.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigTree, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tree = format.parse(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        source: e,
    })?;

    tracing::debug!(path = %path.display(), %format, "loaded config file");
    Ok(tree)
}
