//! Constraint evaluation.
//!
//! Checks run in a fixed order and stop at the first violation: blank,
//! format, is, min, max, min_length, max_length, within. Presence is
//! separate because it looks at the raw container, not the coerced value.

use std::cmp::Ordering;

use sift_value::Value;

use crate::engine::Key;
use crate::error::{InvalidParameterError, Result};
use crate::options::Options;

/// Presence check, against the value as the caller supplied it (a default
/// substituted later does not count).
pub(crate) fn required(key: &Key, was_present: bool, options: &Options) -> Result<()> {
    if options.required && !was_present {
        return Err(InvalidParameterError::required(
            key,
            options.message.as_deref(),
        ));
    }
    Ok(())
}

/// Runs every declared constraint against the coerced value.
pub(crate) fn constraints(key: &Key, value: &Value, options: &Options) -> Result<()> {
    if options.blank == Some(false) && is_blank(value) {
        return Err(InvalidParameterError::blank(key));
    }

    if let Some(pattern) = &options.format {
        if !pattern.anchored.is_match(&value.to_string()) {
            return Err(InvalidParameterError::format(key, &pattern.source));
        }
    }

    if let Some(expected) = &options.is {
        if value != expected {
            return Err(InvalidParameterError::is(key, expected));
        }
    }

    if let Some(bound) = &options.min {
        // An incomparable pair counts as a violation.
        if !matches!(
            value.compare(bound),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            return Err(InvalidParameterError::min(key, bound));
        }
    }

    if let Some(bound) = &options.max {
        if !matches!(value.compare(bound), Some(Ordering::Less | Ordering::Equal)) {
            return Err(InvalidParameterError::max(key, bound));
        }
    }

    // Length bounds only apply to sized values; everything else passes.
    if let Some(bound) = options.min_length {
        if value.length().is_some_and(|len| len < bound) {
            return Err(InvalidParameterError::min_length(key, bound));
        }
    }

    if let Some(bound) = options.max_length {
        if value.length().is_some_and(|len| len > bound) {
            return Err(InvalidParameterError::max_length(key, bound));
        }
    }

    if let Some((lo, hi)) = &options.within {
        let below = !matches!(value.compare(lo), Some(Ordering::Greater | Ordering::Equal));
        let above = !matches!(value.compare(hi), Some(Ordering::Less | Ordering::Equal));
        if below || above {
            return Err(InvalidParameterError::within(key, lo, hi));
        }
    }

    Ok(())
}

/// Blank means: null, whitespace-only text, or an empty container. Other
/// kinds (false, 0) are never blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Text(s) => !s.chars().any(|c| !c.is_whitespace()),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}
