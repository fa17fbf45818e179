//! Keyword parameters passed to drawing routines and decorators.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::draw::DrawError;

/// A single parameter value.
///
/// Serialized untagged, so `factor = 0.5` in TOML becomes a [`ParamValue::Float`]
/// and `number = 5` becomes a [`ParamValue::Int`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Int(_) => "an integer",
            Self::Float(_) => "a number",
            Self::Text(_) => "a string",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An ordered mapping of parameter names to values.
///
/// Insertion order is kept for display and serialization, while equality
/// ignores order: two parameter sets are equal when they hold the same
/// name/value pairs.
///
/// # Examples
///
/// ```
/// # use raven_core::draw::Params;
/// let params = Params::new().with("factor", 0.25).with("number", 3);
///
/// assert_eq!(params.float_or("factor", 0.5).unwrap(), 0.25);
/// assert_eq!(params.int_or("number", 5).unwrap(), 3);
/// assert_eq!(params.float_or("missing", 0.5).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns a numeric parameter, or `default` when it is absent.
    ///
    /// Integers are widened to floats.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidParam`] if the parameter is present but not numeric.
    pub fn float_or(&self, name: &str, default: f64) -> Result<f64, DrawError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(ParamValue::Float(value)) => Ok(*value),
            Some(ParamValue::Int(value)) => Ok(*value as f64),
            Some(other) => Err(invalid(name, "a number", other)),
        }
    }

    /// Returns an integer parameter, or `default` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidParam`] if the parameter is present but not an integer.
    pub fn int_or(&self, name: &str, default: i64) -> Result<i64, DrawError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(ParamValue::Int(value)) => Ok(*value),
            Some(other) => Err(invalid(name, "an integer", other)),
        }
    }
}

fn invalid(name: &str, expected: &'static str, found: &ParamValue) -> DrawError {
    DrawError::InvalidParam {
        name: name.to_string(),
        expected,
        found: format!("{found} ({})", found.type_name()),
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}
