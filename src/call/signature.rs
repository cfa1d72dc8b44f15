use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Args, CallError};

/// A declared parameter, optionally with a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<Value>,
}

/// The parameters a callable accepts.
///
/// Declared parameters can be filled positionally or by name. Positional
/// arguments beyond the declared ones are accepted only with
/// [`with_var_positional`](Self::with_var_positional), and unknown names only
/// with [`with_var_keywords`](Self::with_var_keywords).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<Param>,
    var_positional: bool,
    var_keywords: bool,
}

impl Signature {
    /// Creates a signature with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter that must be supplied.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            default: None,
        });
        self
    }

    /// Declares a parameter that falls back to `default` when not supplied.
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param {
            name: name.into(),
            default: Some(default.into()),
        });
        self
    }

    /// Accepts any number of extra positional arguments.
    pub fn with_var_positional(mut self) -> Self {
        self.var_positional = true;
        self
    }

    /// Accepts named arguments that match no declared parameter.
    pub fn with_var_keywords(mut self) -> Self {
        self.var_keywords = true;
        self
    }

    /// Declared parameters, in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Binds `args` to this signature on behalf of `function`.
    pub fn bind(&self, function: &str, args: Args) -> Result<Bound, CallError> {
        let (positional, named) = args.into_parts();
        let given = positional.len();
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        let mut bound = Bound::default();

        for (index, value) in positional.into_iter().enumerate() {
            match slots.get_mut(index) {
                Some(slot) => *slot = Some(value),
                None if self.var_positional => bound.extra_positional.push(value),
                None => {
                    return Err(CallError::TooManyPositional {
                        function: function.to_string(),
                        expected: self.params.len(),
                        given,
                    })
                }
            }
        }

        for (name, value) in named {
            match self.params.iter().position(|p| p.name == name) {
                Some(index) if slots[index].is_some() => {
                    return Err(CallError::MultipleValues {
                        function: function.to_string(),
                        name,
                    });
                }
                Some(index) => slots[index] = Some(value),
                None if self.var_keywords => {
                    bound.extra_named.insert(name, value);
                }
                None => {
                    return Err(CallError::UnexpectedKeyword {
                        function: function.to_string(),
                        name,
                    });
                }
            }
        }

        for (param, slot) in self.params.iter().zip(slots) {
            let value = match slot.or_else(|| param.default.clone()) {
                Some(value) => value,
                None => {
                    return Err(CallError::MissingArgument {
                        function: function.to_string(),
                        name: param.name.clone(),
                    })
                }
            };
            bound.values.insert(param.name.clone(), value);
        }

        Ok(bound)
    }
}

/// Arguments after binding: one value per declared parameter, plus whatever
/// the catch-alls collected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound {
    values: Map<String, Value>,
    extra_positional: Vec<Value>,
    extra_named: Map<String, Value>,
}

impl Bound {
    /// Looks up a declared parameter, then the keyword catch-all.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .get(name)
            .or_else(|| self.extra_named.get(name))
    }

    /// Deserializes the value bound to `name`.
    ///
    /// Fails with [`CallError::Unbound`] when nothing is bound to `name`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, CallError> {
        let value = self
            .get(name)
            .ok_or_else(|| CallError::Unbound(name.to_string()))?;
        T::deserialize(value).map_err(|e| CallError::InvalidArgument {
            name: name.to_string(),
            source: e,
        })
    }

    /// Positional arguments collected by the positional catch-all.
    pub fn extra_positional(&self) -> &[Value] {
        &self.extra_positional
    }

    /// Named arguments collected by the keyword catch-all.
    pub fn extra_named(&self) -> &Map<String, Value> {
        &self.extra_named
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signature() -> Signature {
        Signature::new()
            .required("parameter_1")
            .optional("parameter_2", Value::Null)
            .optional("parameter_3", "default")
    }

    #[test]
    fn test_binds_positional_then_defaults() {
        let bound = signature().bind("f", Args::new().arg("p1")).unwrap();

        assert_eq!(bound.get("parameter_1"), Some(&json!("p1")));
        assert_eq!(bound.get("parameter_2"), Some(&Value::Null));
        assert_eq!(bound.get("parameter_3"), Some(&json!("default")));
    }

    #[test]
    fn test_binds_by_name() {
        let args = Args::new()
            .named("parameter_3", 3)
            .named("parameter_1", 1);

        let bound = signature().bind("f", args).unwrap();

        assert_eq!(bound.get("parameter_1"), Some(&json!(1)));
        assert_eq!(bound.get("parameter_3"), Some(&json!(3)));
    }

    #[test]
    fn test_unexpected_keyword() {
        let args = Args::new().named("parameter_1", 1).named("other", 2);

        let result = signature().bind("f", args);

        assert!(matches!(
            result,
            Err(CallError::UnexpectedKeyword { name, .. }) if name == "other"
        ));
    }

    #[test]
    fn test_var_keywords_collects_unknown_names() {
        let args = Args::new().named("parameter_1", 1).named("other", 2);

        let bound = signature().with_var_keywords().bind("f", args).unwrap();

        assert_eq!(bound.extra_named().len(), 1);
        assert_eq!(bound.get("other"), Some(&json!(2)));
    }

    #[test]
    fn test_multiple_values() {
        let args = Args::new().arg(1).named("parameter_1", 2);

        let result = signature().bind("f", args);

        assert!(matches!(
            result,
            Err(CallError::MultipleValues { name, .. }) if name == "parameter_1"
        ));
    }

    #[test]
    fn test_missing_required_argument() {
        let result = signature().bind("f", Args::new().named("parameter_2", 2));

        assert!(matches!(
            result,
            Err(CallError::MissingArgument { name, .. }) if name == "parameter_1"
        ));
    }

    #[test]
    fn test_too_many_positional() {
        let args = Args::new().arg(1).arg(2).arg(3).arg(4);

        let err = signature().bind("f", args).unwrap_err();

        assert!(matches!(
            err,
            CallError::TooManyPositional {
                expected: 3,
                given: 4,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "f() takes 3 positional arguments but 4 were given"
        );
    }

    #[test]
    fn test_var_positional_collects_surplus() {
        let args = Args::new().arg(1).arg(2).arg(3).arg(4);

        let bound = signature().with_var_positional().bind("f", args).unwrap();

        assert_eq!(bound.extra_positional(), &[json!(4)]);
    }

    #[test]
    fn test_get_as() {
        let bound = Signature::new()
            .required("port")
            .required("hosts")
            .bind("f", Args::new().arg(8080).arg(json!(["a", "b"])))
            .unwrap();

        assert_eq!(bound.get_as::<u16>("port").unwrap(), 8080);
        assert_eq!(
            bound.get_as::<Vec<String>>("hosts").unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(matches!(
            bound.get_as::<String>("port"),
            Err(CallError::InvalidArgument { .. })
        ));
        assert!(matches!(
            bound.get_as::<String>("missing"),
            Err(CallError::Unbound(_))
        ));
    }
}
