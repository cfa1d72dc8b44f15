//! Argument bags, signatures, and the [`Callable`] capability.

mod args;
mod error;
mod function;
mod signature;

pub use args::Args;
pub use error::CallError;
pub use function::{Callable, Function};
pub use signature::{Bound, Param, Signature};
