//! Natural string representation.
//!
//! This is the form String coercion produces and error messages interpolate.
//! Scalars render bare (no quotes), temporal values render in ISO form, and
//! containers render as compact JSON.

use std::fmt;

use crate::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(d) => write!(f, "{}", d.normalize()),
            Self::Text(t) => f.write_str(t),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Array(_) | Self::Object(_) => {
                write!(f, "{}", serde_json::Value::from(self.clone()))
            }
        }
    }
}
