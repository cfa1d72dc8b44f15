use serde_json::{Map, Value};

/// Arguments for a single call: positional values in order, plus named values.
///
/// ```
/// use param_inject::Args;
///
/// let args = Args::new().arg(1).named("verbose", true);
/// assert_eq!(args.positional().len(), 1);
/// assert!(args.contains_named("verbose"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: Map<String, Value>,
}

impl Args {
    /// Creates an empty argument bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Adds a named argument, replacing any earlier value for `name`.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Positional arguments, in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named arguments supplied by the caller.
    pub fn named_args(&self) -> &Map<String, Value> {
        &self.named
    }

    /// Whether the caller passed `name` explicitly.
    pub fn contains_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub(crate) fn named_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.named
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Map<String, Value>) {
        (self.positional, self.named)
    }
}
