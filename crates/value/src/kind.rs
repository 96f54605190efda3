use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value), and the target type of a
/// parameter declaration.
///
/// The set is closed: there is no user-extensible type registry. Every kind
/// except [`ValueKind::Null`] is a registered coercion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    /// Arbitrary-precision decimal with significant-digit rounding.
    Decimal,
    String,
    Array,
    Object,
    Date,
    Time,
    DateTime,
}

impl ValueKind {
    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date_time",
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
        }
    }

    /// Whether this kind acts as a container for child values.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Whether this kind represents a date or time value.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }

    /// Whether this kind is numeric (integer, float, or decimal).
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
