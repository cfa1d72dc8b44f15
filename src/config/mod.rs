//! Configuration loading, key navigation and parameter selection.

mod error;
mod file;
mod navigate;
mod select;

pub use error::ConfigError;
pub use file::{load_config, ConfigFormat};
pub use navigate::navigate;
pub use select::{parameter_names, select_parameters, PARAMETER_SEPARATOR};

/// A parsed configuration file: nested mappings, sequences and scalars.
pub type ConfigTree = serde_json::Value;
