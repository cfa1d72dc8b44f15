//! Injection of config values as named defaults into calls.

mod builder;
mod params;
mod wrap;

pub use builder::{inject_parameters, Injector};
pub use params::InjectedParameters;
pub use wrap::{Decorator, Injected};
