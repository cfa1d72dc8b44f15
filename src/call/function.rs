use super::{Args, Bound, CallError, Signature};

/// Something that can be invoked with an [`Args`] bag.
///
/// `name` and `doc` identify the callable for introspection; wrappers are
/// expected to report their target's values.
pub trait Callable {
    type Output;

    fn name(&self) -> &str;

    fn doc(&self) -> Option<&str>;

    fn signature(&self) -> &Signature;

    fn call(&self, args: Args) -> Result<Self::Output, CallError>;
}

/// A named function body together with the signature it is called through.
///
/// ```
/// use param_inject::{Args, Bound, Callable, Function, Signature};
///
/// let greet = Function::new(
///     "greet",
///     Signature::new().required("name"),
///     |args: &Bound| format!("hello {}", args.get_as::<String>("name").unwrap()),
/// )
/// .with_doc("Greets someone by name.");
///
/// let out = greet.call(Args::new().named("name", "world"))?;
/// assert_eq!(out, "hello world");
/// # Ok::<(), param_inject::CallError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Function<F> {
    name: String,
    doc: Option<String>,
    signature: Signature,
    body: F,
}

impl<F, R> Function<F>
where
    F: Fn(&Bound) -> R,
{
    pub fn new(name: impl Into<String>, signature: Signature, body: F) -> Self {
        Self {
            name: name.into(),
            doc: None,
            signature,
            body,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl<F, R> Callable for Function<F>
where
    F: Fn(&Bound) -> R,
{
    type Output = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Args) -> Result<R, CallError> {
        let bound = self.signature.bind(&self.name, args)?;
        Ok((self.body)(&bound))
    }
}
