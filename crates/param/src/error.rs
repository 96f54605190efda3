//! The single failure signal of the engine.
//!
//! Every failure mode — impossible coercion, violated constraint, missing
//! required key, unregistered target type — surfaces as
//! [`InvalidParameterError`]. The message distinguishes the cause; the kind
//! does not. Hosts catch this one type and map it to a response.

use std::fmt::Display;

use sift_value::{Value, ValueKind};

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, InvalidParameterError>;

/// A parameter failed coercion or validation.
///
/// Carries a human-readable message and the offending key (when one is
/// known). Messages are deterministic: the same input and declaration
/// always produce the same text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidParameterError {
    /// Human-readable description of the first failure encountered.
    pub message: String,

    /// The key the failing declaration addressed, if any.
    pub param: Option<String>,
}

impl InvalidParameterError {
    /// Creates an error with a caller-supplied message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            param: None,
        }
    }

    /// Attaches the offending key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Display) -> Self {
        self.param = Some(param.to_string());
        self
    }

    // ==================== Per-failure constructors ====================

    /// A required parameter was absent or null.
    ///
    /// `custom` overrides the default message (the `message` option).
    pub fn required(key: impl Display, custom: Option<&str>) -> Self {
        let message = custom.map_or_else(
            || format!("Parameter {key} is required"),
            ToOwned::to_owned,
        );
        Self::new(message).with_param(key)
    }

    /// A parameter declared `blank: false` was empty.
    pub fn blank(key: impl Display) -> Self {
        Self::new(format!("Parameter {key} cannot be blank")).with_param(key)
    }

    /// A parameter did not fully match its declared pattern.
    pub fn format(key: impl Display, pattern: &str) -> Self {
        Self::new(format!("Parameter {key} must match format {pattern}")).with_param(key)
    }

    /// A parameter did not equal its declared literal.
    pub fn is(key: impl Display, expected: &Value) -> Self {
        Self::new(format!("Parameter {key} must be {expected}")).with_param(key)
    }

    /// A parameter fell below its lower bound (or was incomparable to it).
    pub fn min(key: impl Display, bound: &Value) -> Self {
        Self::new(format!("Parameter {key} cannot be less than {bound}")).with_param(key)
    }

    /// A parameter exceeded its upper bound (or was incomparable to it).
    pub fn max(key: impl Display, bound: &Value) -> Self {
        Self::new(format!("Parameter {key} cannot be greater than {bound}")).with_param(key)
    }

    /// A parameter was shorter than its declared minimum length.
    pub fn min_length(key: impl Display, bound: usize) -> Self {
        Self::new(format!(
            "Parameter {key} cannot have length less than {bound}"
        ))
        .with_param(key)
    }

    /// A parameter was longer than its declared maximum length.
    pub fn max_length(key: impl Display, bound: usize) -> Self {
        Self::new(format!(
            "Parameter {key} cannot have length greater than {bound}"
        ))
        .with_param(key)
    }

    /// A parameter fell outside its declared inclusive range.
    pub fn within(key: impl Display, lo: &Value, hi: &Value) -> Self {
        Self::new(format!("Parameter {key} must be within {lo}..{hi}")).with_param(key)
    }

    /// A value could not be represented as the target kind.
    pub fn coercion(value: &Value, target: ValueKind) -> Self {
        Self::new(format!("'{value}' is not a valid {}", target.name()))
    }

    /// The declared target kind is not a registered coercion target.
    pub fn not_registered(target: ValueKind) -> Self {
        Self::new(format!("{} is not a registered type", target.name()))
    }

    /// A named transform was applied to a value it cannot operate on.
    pub fn transform(key: impl Display, actual: ValueKind) -> Self {
        Self::new(format!(
            "Parameter {key} cannot be transformed: got {}",
            actual.name()
        ))
        .with_param(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = InvalidParameterError::required("price", None);
        assert_eq!(err.to_string(), "Parameter price is required");
        assert_eq!(err.param.as_deref(), Some("price"));
    }

    #[test]
    fn required_custom_message_wins() {
        let err = InvalidParameterError::required("price", Some("No price specified"));
        assert_eq!(err.to_string(), "No price specified");
        assert_eq!(err.param.as_deref(), Some("price"));
    }

    #[test]
    fn constraint_messages() {
        assert_eq!(
            InvalidParameterError::blank("price").to_string(),
            "Parameter price cannot be blank"
        );
        assert_eq!(
            InvalidParameterError::format("price", r"[0-9]+\$").to_string(),
            r"Parameter price must match format [0-9]+\$"
        );
        assert_eq!(
            InvalidParameterError::is("price", &Value::text("50")).to_string(),
            "Parameter price must be 50"
        );
        assert_eq!(
            InvalidParameterError::min("price", &Value::from(51)).to_string(),
            "Parameter price cannot be less than 51"
        );
        assert_eq!(
            InvalidParameterError::max("price", &Value::from(49)).to_string(),
            "Parameter price cannot be greater than 49"
        );
        assert_eq!(
            InvalidParameterError::min_length("word", 4).to_string(),
            "Parameter word cannot have length less than 4"
        );
        assert_eq!(
            InvalidParameterError::max_length("word", 2).to_string(),
            "Parameter word cannot have length greater than 2"
        );
        assert_eq!(
            InvalidParameterError::within("price", &Value::from(51), &Value::from(100)).to_string(),
            "Parameter price must be within 51..100"
        );
    }

    #[test]
    fn coercion_messages() {
        assert_eq!(
            InvalidParameterError::coercion(&Value::text("abc"), ValueKind::Integer).to_string(),
            "'abc' is not a valid Integer"
        );
        assert_eq!(
            InvalidParameterError::not_registered(ValueKind::Null).to_string(),
            "Null is not a registered type"
        );
    }
}
