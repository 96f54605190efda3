//! Unified value enum covering every runtime type the engine can hold.

use std::cmp::Ordering;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::ValueKind;

/// Ordered list container.
pub type Array = Vec<Value>;

/// Keyed map container. Insertion order is preserved so repeated runs over
/// the same input produce identical iteration and error order.
pub type Object = indexmap::IndexMap<String, Value>;

/// A dynamically typed value.
///
/// This is the unit the engine reads from and writes back into the caller's
/// container: raw request input arrives as `Text`/`Array`/`Object` values and
/// leaves coerced into the declared kind.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null / absent value.
    #[default]
    Null,

    /// Boolean value.
    Boolean(bool),

    /// Integer number (i64).
    Integer(i64),

    /// Floating point number (f64).
    Float(f64),

    /// Arbitrary-precision decimal.
    Decimal(Decimal),

    /// UTF-8 text.
    Text(String),

    /// Ordered list of values.
    Array(Array),

    /// Keyed map of values.
    Object(Object),

    /// Calendar date (year, month, day).
    Date(NaiveDate),

    /// Time of day (hour, minute, second, fraction).
    Time(NaiveTime),

    /// Date + time + UTC offset.
    DateTime(ChronoDateTime<FixedOffset>),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a text value from `String` or `&str`.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create an empty array value.
    #[must_use]
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an empty object value.
    #[must_use]
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is an array.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is a container (array or object).
    #[inline]
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Check if this is numeric (integer, float, or decimal).
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_) | Self::Decimal(_))
    }

    // ==================== Accessors ====================

    /// Try to get as boolean.
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as decimal.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as array reference.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as mutable array reference.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as mutable object reference.
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as date.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as time of day.
    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as datetime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<ChronoDateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    // ==================== Ordering and length ====================

    /// Ordered comparison between two values.
    ///
    /// Numeric kinds interoperate (an integer compares against a decimal);
    /// text and temporal values compare within their own kind. Returns
    /// `None` when the pair has no defined ordering, which validation
    /// treats as a bound violation.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::Time(a), Self::Time(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                a.to_f64()?.partial_cmp(&b.to_f64()?)
            }
            _ => None,
        }
    }

    /// Length of a sized value: characters for text, element count for
    /// containers, `None` for everything else.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Text(t) => Some(t.chars().count()),
            Self::Array(a) => Some(a.len()),
            Self::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Self::Time(v)
    }
}

impl From<ChronoDateTime<FixedOffset>> for Value {
    fn from(v: ChronoDateTime<FixedOffset>) -> Self {
        Self::DateTime(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
