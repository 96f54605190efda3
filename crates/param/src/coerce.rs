//! Type coercion.
//!
//! Pure conversion of a raw value into the declared target kind. A value
//! already of the target kind passes through unchanged; null never reaches
//! this module (the engine short-circuits absent values first).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sift_value::{Object, Value, ValueKind};

use crate::error::{InvalidParameterError, Result};
use crate::options::{DEFAULT_PRECISION, Options};

/// Converts `value` to `target`, or fails with the coercion error for that
/// kind.
pub fn coerce(value: Value, target: ValueKind, options: &Options) -> Result<Value> {
    if value.kind() == target {
        return Ok(value);
    }
    match target {
        ValueKind::String => Ok(Value::Text(value.to_string())),
        ValueKind::Integer => to_integer(value),
        ValueKind::Float => to_float(value),
        ValueKind::Decimal => to_decimal(value, options.precision.unwrap_or(DEFAULT_PRECISION)),
        ValueKind::Boolean => to_boolean(value),
        ValueKind::Date => to_date(value),
        ValueKind::Time => to_time(value),
        ValueKind::DateTime => to_datetime(value),
        ValueKind::Array => to_array(value, options.delimiter_str()),
        ValueKind::Object => to_object(value, options.delimiter_str(), options.separator_str()),
        ValueKind::Null => Err(InvalidParameterError::not_registered(target)),
    }
}

fn to_integer(value: Value) -> Result<Value> {
    match &value {
        Value::Text(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| InvalidParameterError::coercion(&value, ValueKind::Integer)),
        Value::Float(f) => float_to_i64(*f)
            .map(Value::Integer)
            .ok_or_else(|| InvalidParameterError::coercion(&value, ValueKind::Integer)),
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Integer)),
    }
}

/// Integral, in-range floats convert; everything else is unrepresentable.
/// The round-trip comparison catches magnitudes `as` would saturate.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    let i = f as i64;
    (i as f64 == f).then_some(i)
}

fn to_float(value: Value) -> Result<Value> {
    match &value {
        Value::Integer(i) => Ok(Value::Float(*i as f64)),
        Value::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| InvalidParameterError::coercion(&value, ValueKind::Float)),
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Float)),
    }
}

fn to_decimal(value: Value, precision: u32) -> Result<Value> {
    let parsed = match &value {
        // Currency formatting is stripped before parsing: "$100,000" is
        // the number 100000.
        Value::Text(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            cleaned.parse::<Decimal>().ok()
        }
        Value::Integer(i) => Some(Decimal::from(*i)),
        Value::Float(f) => Decimal::from_f64(*f),
        _ => None,
    };
    parsed
        .map(|d| Value::Decimal(round_significant(d, precision)))
        .ok_or_else(|| InvalidParameterError::coercion(&value, ValueKind::Decimal))
}

/// Rounds to `digits` significant digits (midpoint away from zero),
/// producing the faithful-rounding display value rather than full
/// precision.
fn round_significant(d: Decimal, digits: u32) -> Decimal {
    if d.is_zero() || digits == 0 {
        return d;
    }
    let places = i64::from(digits) - magnitude(&d);
    if places >= 0 {
        let dp = u32::try_from(places.min(28)).unwrap_or(28);
        d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    } else {
        // More integer digits than requested precision: scale down, round
        // at the unit, scale back up.
        let k = u32::try_from((-places).min(28)).unwrap_or(28);
        let shift = Decimal::from_i128_with_scale(10_i128.pow(k), 0);
        (d / shift).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * shift
    }
}

/// Count of digits the most significant digit sits left (positive) or
/// right (negative) of the decimal point.
fn magnitude(d: &Decimal) -> i64 {
    let abs = d.abs();
    if abs >= Decimal::ONE {
        abs.trunc().normalize().to_string().len() as i64
    } else {
        // value = mantissa * 10^-scale; leading zeros after the point are
        // scale minus the mantissa's digit count.
        let mantissa_digits = abs.mantissa().abs().to_string().len() as i64;
        mantissa_digits - i64::from(abs.scale())
    }
}

fn to_boolean(value: Value) -> Result<Value> {
    let token = match &value {
        Value::Text(s) => s.trim().to_lowercase(),
        Value::Integer(i) => i.to_string(),
        _ => return Err(InvalidParameterError::coercion(&value, ValueKind::Boolean)),
    };
    match token.as_str() {
        "1" | "true" | "t" | "yes" | "y" => Ok(Value::Boolean(true)),
        "0" | "false" | "f" | "no" | "n" => Ok(Value::Boolean(false)),
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Boolean)),
    }
}

fn to_date(value: Value) -> Result<Value> {
    match &value {
        Value::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|_| InvalidParameterError::coercion(&value, ValueKind::Date)),
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Date)),
    }
}

fn to_time(value: Value) -> Result<Value> {
    match &value {
        Value::Text(s) => {
            let s = s.trim();
            NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
                .map(Value::Time)
                // Timestamps still coerce: keep their time-of-day component.
                .or_else(|_| {
                    DateTime::parse_from_rfc3339(s)
                        .map(|dt| Value::Time(dt.time()))
                        .map_err(|_| InvalidParameterError::coercion(&value, ValueKind::Time))
                })
        }
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Time)),
    }
}

fn to_datetime(value: Value) -> Result<Value> {
    match &value {
        Value::Text(s) => {
            let s = s.trim();
            parse_datetime(s)
                .map(Value::DateTime)
                .ok_or_else(|| InvalidParameterError::coercion(&value, ValueKind::DateTime))
        }
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::DateTime)),
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    // Naive timestamps are taken as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

fn to_array(value: Value, delimiter: &str) -> Result<Value> {
    match &value {
        Value::Text(s) => {
            if s.is_empty() {
                return Ok(Value::array_empty());
            }
            Ok(Value::Array(
                s.split(delimiter).map(Value::text).collect(),
            ))
        }
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Array)),
    }
}

fn to_object(value: Value, delimiter: &str, separator: &str) -> Result<Value> {
    match &value {
        Value::Text(s) => {
            let mut object = Object::new();
            for entry in s.split(delimiter).filter(|e| !e.is_empty()) {
                match entry.split_once(separator) {
                    Some((key, val)) => object.insert(key.to_owned(), Value::text(val)),
                    None => object.insert(entry.to_owned(), Value::Null),
                };
            }
            Ok(Value::Object(object))
        }
        _ => Err(InvalidParameterError::coercion(&value, ValueKind::Object)),
    }
}
