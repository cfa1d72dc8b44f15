use thiserror::Error;

/// Errors from binding arguments to a [`Signature`](super::Signature) or
/// reading a bound value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CallError {
    #[error("{function}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { function: String, name: String },

    #[error("{function}() got multiple values for argument '{name}'")]
    MultipleValues { function: String, name: String },

    #[error("{function}() missing required argument '{name}'")]
    MissingArgument { function: String, name: String },

    #[error("{function}() takes {expected} positional arguments but {given} were given")]
    TooManyPositional {
        function: String,
        expected: usize,
        given: usize,
    },

    #[error("no argument named '{0}' is bound")]
    Unbound(String),

    #[error("argument '{name}' has an unexpected type: {source}")]
    InvalidArgument {
        name: String,
        source: serde_json::Error,
    },
}
