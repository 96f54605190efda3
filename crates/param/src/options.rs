//! Declaration options.
//!
//! One [`Options`] value configures one declaration: default substitution,
//! transform, presence and blankness rules, constraints, decimal precision,
//! key renaming, and the split characters for string-to-container coercion.

use std::fmt;

use regex::Regex;
use sift_value::Value;

use crate::engine::Key;
use crate::error::{InvalidParameterError, Result};

/// Default applied when the raw value is absent or null.
pub enum DefaultValue {
    /// A literal value.
    Literal(Value),
    /// A zero-argument provider invoked at declaration time.
    Provider(Box<dyn Fn() -> Value>),
}

impl DefaultValue {
    pub(crate) fn resolve(&self) -> Value {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Provider(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Built-in transform operations on text values.
///
/// The set is closed; arbitrary logic goes through [`Transform::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedTransform {
    Uppercase,
    Lowercase,
    /// Uppercase the first character, lowercase the rest.
    Capitalize,
    Trim,
}

impl NamedTransform {
    fn apply(self, input: &str) -> String {
        match self {
            Self::Uppercase => input.to_uppercase(),
            Self::Lowercase => input.to_lowercase(),
            Self::Capitalize => {
                let mut chars = input.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                })
            }
            Self::Trim => input.trim().to_owned(),
        }
    }
}

/// Transform applied to the effective value before coercion.
pub enum Transform {
    /// One of the built-in text operations.
    Named(NamedTransform),
    /// A caller-supplied one-argument function.
    Custom(Box<dyn Fn(Value) -> Value>),
}

impl Transform {
    pub(crate) fn apply(&self, key: &Key, value: Value) -> Result<Value> {
        match self {
            Self::Named(op) => match value {
                Value::Text(s) => Ok(Value::Text(op.apply(&s))),
                other => Err(InvalidParameterError::transform(key, other.kind())),
            },
            Self::Custom(f) => Ok(f(value)),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(op) => f.debug_tuple("Named").field(op).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A format constraint: the caller's pattern, matched against the whole
/// value. The original pattern text is kept for error messages.
#[derive(Debug, Clone)]
pub(crate) struct FormatPattern {
    pub(crate) source: String,
    pub(crate) anchored: Regex,
}

/// Default significant digits for decimal coercion.
pub const DEFAULT_PRECISION: u32 = 14;

/// Configuration for one parameter declaration.
///
/// Constructed with builder methods; a fresh `Options::new()` declares an
/// optional parameter with no constraints.
///
/// ```rust,ignore
/// use sift_param::{Options, NamedTransform};
///
/// let opts = Options::new()
///     .required()
///     .min_length(3)
///     .transform(NamedTransform::Lowercase);
/// ```
#[derive(Debug, Default)]
pub struct Options {
    pub(crate) default: Option<DefaultValue>,
    pub(crate) transform: Option<Transform>,
    pub(crate) required: bool,
    pub(crate) blank: Option<bool>,
    pub(crate) format: Option<FormatPattern>,
    pub(crate) is: Option<Value>,
    pub(crate) min: Option<Value>,
    pub(crate) max: Option<Value>,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) within: Option<(Value, Value)>,
    pub(crate) precision: Option<u32>,
    pub(crate) rename_to: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) delimiter: Option<String>,
    pub(crate) separator: Option<String>,
}

impl Options {
    /// An optional, unconstrained declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal default used when the raw value is absent or null.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Literal(value.into()));
        self
    }

    /// Default produced by a zero-argument provider.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_with(mut self, provider: impl Fn() -> Value + 'static) -> Self {
        self.default = Some(DefaultValue::Provider(Box::new(provider)));
        self
    }

    /// Built-in transform applied before coercion.
    #[must_use = "builder methods must be chained or built"]
    pub fn transform(mut self, op: NamedTransform) -> Self {
        self.transform = Some(Transform::Named(op));
        self
    }

    /// Caller-supplied transform applied before coercion.
    #[must_use = "builder methods must be chained or built"]
    pub fn transform_with(mut self, f: impl Fn(Value) -> Value + 'static) -> Self {
        self.transform = Some(Transform::Custom(Box::new(f)));
        self
    }

    /// The parameter must be present and non-null.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether blank values are allowed. Only `blank(false)` activates the
    /// check; `blank(true)` is the permissive default spelled out.
    #[must_use = "builder methods must be chained or built"]
    pub fn blank(mut self, allowed: bool) -> Self {
        self.blank = Some(allowed);
        self
    }

    /// The value's string form must fully match `pattern` (the pattern is
    /// anchored start-to-end).
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, pattern: &Regex) -> Self {
        let anchored = Regex::new(&format!("^(?:{})$", pattern.as_str()))
            .expect("wrapping a compiled pattern in an anchored group is valid");
        self.format = Some(FormatPattern {
            source: pattern.as_str().to_owned(),
            anchored,
        });
        self
    }

    /// The coerced value must equal this literal exactly.
    #[must_use = "builder methods must be chained or built"]
    pub fn is(mut self, expected: impl Into<Value>) -> Self {
        self.is = Some(expected.into());
        self
    }

    /// Inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, bound: impl Into<Value>) -> Self {
        self.min = Some(bound.into());
        self
    }

    /// Inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, bound: impl Into<Value>) -> Self {
        self.max = Some(bound.into());
        self
    }

    /// Minimum length (chars for text, elements for containers).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    /// Maximum length (chars for text, elements for containers).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    /// The coerced value must fall within `lo..=hi`.
    #[must_use = "builder methods must be chained or built"]
    pub fn within(mut self, lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        self.within = Some((lo.into(), hi.into()));
        self
    }

    /// Alias for [`within`](Self::within).
    #[must_use = "builder methods must be chained or built"]
    pub fn in_range(self, lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        self.within(lo, hi)
    }

    /// Alias for [`within`](Self::within).
    #[must_use = "builder methods must be chained or built"]
    pub fn range(self, lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        self.within(lo, hi)
    }

    /// Significant digits for decimal coercion (default 14).
    #[must_use = "builder methods must be chained or built"]
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Write the final value under this key and delete the original.
    #[must_use = "builder methods must be chained or built"]
    pub fn rename_to(mut self, key: impl Into<String>) -> Self {
        self.rename_to = Some(key.into());
        self
    }

    /// Override for the required-violation message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Split character(s) for string-to-array and string-to-hash coercion
    /// (default `,`).
    #[must_use = "builder methods must be chained or built"]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Key/value split character(s) for string-to-hash coercion
    /// (default `:`).
    #[must_use = "builder methods must be chained or built"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub(crate) fn delimiter_str(&self) -> &str {
        self.delimiter.as_deref().unwrap_or(",")
    }

    pub(crate) fn separator_str(&self) -> &str {
        self.separator.as_deref().unwrap_or(":")
    }
}
