//! JSON bridging.
//!
//! Hosts typically hand the engine JSON-shaped input; these conversions turn
//! `serde_json::Value` trees into [`Value`] containers and back. Kinds JSON
//! cannot represent natively (decimal, date, time, datetime) serialize as
//! their string form.

use crate::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else {
                    // u64 overflow or fractional: fall back to f64.
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Self::Object(object)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Boolean(b) => Self::Bool(b),
            Value::Integer(i) => Self::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::Decimal(d) => Self::String(d.normalize().to_string()),
            Value::Text(t) => Self::String(t),
            Value::Array(items) => {
                Self::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(object) => {
                let mut map = serde_json::Map::with_capacity(object.len());
                for (key, value) in object {
                    map.insert(key, serde_json::Value::from(value));
                }
                Self::Object(map)
            }
            temporal @ (Value::Date(_) | Value::Time(_) | Value::DateTime(_)) => {
                Self::String(temporal.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{Value, ValueKind};

    #[test]
    fn json_scalars_map_to_value_kinds() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::from(true));
        assert_eq!(Value::from(json!(42)), Value::from(42));
        assert_eq!(Value::from(json!(1.5)), Value::from(1.5));
        assert_eq!(Value::from(json!("foo")), Value::text("foo"));
    }

    #[test]
    fn json_containers_convert_recursively() {
        let v = Value::from(json!({"bar": "1", "baz": [2, null]}));
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("bar"), Some(&Value::text("1")));

        let baz = obj.get("baz").unwrap().as_array().unwrap();
        assert_eq!(baz[0], Value::from(2));
        assert_eq!(baz[1], Value::Null);
    }

    #[test]
    fn value_back_to_json() {
        let v = Value::from(json!({"a": [1, "x", true]}));
        assert_eq!(serde_json::Value::from(v), json!({"a": [1, "x", true]}));
    }

    #[test]
    fn decimal_serializes_as_string() {
        let d: rust_decimal::Decimal = "12345.7".parse().unwrap();
        let v = Value::Decimal(d);
        assert_eq!(v.kind(), ValueKind::Decimal);
        assert_eq!(serde_json::Value::from(v), json!("12345.7"));
    }

    #[test]
    fn date_serializes_as_string() {
        let date = chrono::NaiveDate::from_ymd_opt(2014, 8, 7).unwrap();
        assert_eq!(serde_json::Value::from(Value::from(date)), json!("2014-08-07"));
    }
}
