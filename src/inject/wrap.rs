use super::InjectedParameters;
use crate::call::{Args, CallError, Callable, Signature};

/// Wraps callables so they receive injected parameters as named defaults.
///
/// Produced by [`Injector::build`](super::Injector::build). One decorator can
/// wrap any number of callables; they all share the same parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    parameters: InjectedParameters,
}

impl Decorator {
    /// Creates a decorator injecting `parameters`.
    pub fn new(parameters: InjectedParameters) -> Self {
        Self { parameters }
    }

    /// The parameters every wrapped callable receives.
    pub fn parameters(&self) -> &InjectedParameters {
        &self.parameters
    }

    /// Wraps `target`.
    pub fn decorate<C: Callable>(&self, target: C) -> Injected<C> {
        Injected {
            target,
            parameters: self.parameters.clone(),
        }
    }
}

/// A callable whose calls are completed with injected parameters.
///
/// Named arguments given by the caller always win over injected ones.
/// Positional arguments are passed through as they are and are never
/// compared against injected names.
#[derive(Debug, Clone)]
pub struct Injected<C> {
    target: C,
    parameters: InjectedParameters,
}

impl<C> Injected<C> {
    /// The parameters injected into every call.
    pub fn parameters(&self) -> &InjectedParameters {
        &self.parameters
    }
}

impl<C: Callable> Callable for Injected<C> {
    type Output = C::Output;

    fn name(&self) -> &str {
        self.target.name()
    }

    fn doc(&self) -> Option<&str> {
        self.target.doc()
    }

    fn signature(&self) -> &Signature {
        self.target.signature()
    }

    fn call(&self, mut args: Args) -> Result<C::Output, CallError> {
        let effective = self.parameters.effective_for(&args);
        tracing::trace!(
            function = self.target.name(),
            injected = ?effective.keys().collect::<Vec<_>>(),
            "calling with injected parameters"
        );

        args.named_mut().extend(effective);
        self.target.call(args)
    }
}
