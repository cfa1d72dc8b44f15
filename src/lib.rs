pub mod call;
pub mod config;
mod error;
pub mod inject;

pub use call::{Args, Bound, CallError, Callable, Function, Param, Signature};
pub use config::{ConfigError, ConfigTree};
pub use error::Error;
pub use inject::{inject_parameters, Decorator, Injected, InjectedParameters, Injector};
pub use serde_json::Value;
