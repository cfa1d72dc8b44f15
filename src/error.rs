use crate::call::CallError;
use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the param-inject library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("call error: {0}")]
    Call(#[from] CallError),
}
