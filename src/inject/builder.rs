use std::path::{Path, PathBuf};

use super::{Decorator, InjectedParameters};
use crate::config::{load_config, navigate, select_parameters, ConfigError};

/// Builder for a [`Decorator`] that injects parameters from a config file.
///
/// The file is read, navigated and filtered once, in [`build`](Self::build).
/// Every problem with the file, the key or the requested parameters is
/// reported there, before any function is wrapped.
///
/// ## Example
///
/// ```no_run
/// use param_inject::{Args, Bound, Callable, Function, Injector, Signature, Value};
///
/// // config.yaml:
/// //   database:
/// //     host: localhost
/// //     port: 5432
/// let connect = Injector::new("config.yaml")
///     .with_key("database")
///     .with_parameters("host, port")
///     .build()?
///     .decorate(Function::new(
///         "connect",
///         Signature::new()
///             .optional("host", Value::Null)
///             .optional("port", Value::Null),
///         |args: &Bound| format!("{:?}:{:?}", args.get("host"), args.get("port")),
///     ));
///
/// connect.call(Args::new())?;
/// connect.call(Args::new().named("port", 6543))?;
/// # Ok::<(), param_inject::Error>(())
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Injector {
    config_file: PathBuf,
    parameters: Option<String>,
    key: Option<String>,
}

impl Injector {
    /// Starts a builder reading from `config_file`, which must end in
    /// `.yaml` or `.json`.
    pub fn new(config_file: impl AsRef<Path>) -> Self {
        Self {
            config_file: config_file.as_ref().to_path_buf(),
            parameters: None,
            key: None,
        }
    }

    /// Names the parameters to inject, separated by `", "`.
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// Selects a nested section of the config, in dot notation, to take
    /// parameters from.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Loads the config file and selects the parameters to inject.
    pub fn build(self) -> Result<Decorator, ConfigError> {
        let tree = load_config(&self.config_file)?;
        let scope = navigate(&tree, self.key.as_deref())?;
        let parameters =
            InjectedParameters::new(select_parameters(scope, self.parameters.as_deref())?);

        tracing::debug!(
            config_file = %self.config_file.display(),
            key = self.key.as_deref().unwrap_or_default(),
            parameters = ?parameters.names().collect::<Vec<_>>(),
            "built parameter injector"
        );

        Ok(Decorator::new(parameters))
    }
}

/// Builds a [`Decorator`] injecting `parameters_to_inject` from `config_file`,
/// optionally scoped to the dotted `key` section.
///
/// Shorthand for [`Injector`]:
///
/// ```no_run
/// use param_inject::inject_parameters;
///
/// let decorator = inject_parameters("config.json", Some("retries, timeout"), Some("client.http"))?;
/// # Ok::<(), param_inject::ConfigError>(())
/// ```
pub fn inject_parameters(
    config_file: impl AsRef<Path>,
    parameters_to_inject: Option<&str>,
    key: Option<&str>,
) -> Result<Decorator, ConfigError> {
    let mut injector = Injector::new(config_file);
    if let Some(parameters) = parameters_to_inject {
        injector = injector.with_parameters(parameters);
    }
    if let Some(key) = key {
        injector = injector.with_key(key);
    }
    injector.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_config() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "top: 0\nsection:\n  inner:\n    retries: 3\n    timeout: 1.5\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn test_build_selects_from_nested_section() {
        let file = yaml_config();

        let decorator = Injector::new(file.path())
            .with_key("section.inner")
            .with_parameters("retries, timeout")
            .build()
            .unwrap();

        let params = decorator.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("retries"), Some(&json!(3)));
        assert_eq!(params.get("timeout"), Some(&json!(1.5)));
    }

    #[test]
    fn test_build_without_parameters_injects_nothing() {
        let file = yaml_config();

        let decorator = Injector::new(file.path()).build().unwrap();

        assert!(decorator.parameters().is_empty());
    }

    #[test]
    fn test_factory_matches_builder() {
        let file = yaml_config();

        let from_factory = inject_parameters(file.path(), Some("top"), None).unwrap();
        let from_builder = Injector::new(file.path())
            .with_parameters("top")
            .build()
            .unwrap();

        assert_eq!(from_factory.parameters(), from_builder.parameters());
    }

    #[test]
    fn test_key_error_wins_over_parameter_error() {
        let file = yaml_config();

        let result = inject_parameters(file.path(), Some("missing"), Some("nope"));

        assert!(matches!(result, Err(ConfigError::NonexistentKey { .. })));
    }

    #[test]
    fn test_parameter_outside_key_scope_is_missing() {
        let file = yaml_config();

        let result = inject_parameters(file.path(), Some("top"), Some("section"));

        assert!(matches!(
            result,
            Err(ConfigError::NonexistentParameter(name)) if name == "top"
        ));
    }

    #[test]
    fn test_each_build_rereads_file() {
        let file = yaml_config();
        let first = inject_parameters(file.path(), Some("top"), None).unwrap();

        std::fs::write(file.path(), "top: 1\n").unwrap();
        let second = inject_parameters(file.path(), Some("top"), None).unwrap();

        assert_eq!(first.parameters().get("top"), Some(&json!(0)));
        assert_eq!(second.parameters().get("top"), Some(&json!(1)));
    }
}
