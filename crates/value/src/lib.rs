//! # sift-value
//!
//! The dynamic value model shared by the sift parameter engine.
//!
//! [`Value`] is a closed enum over every runtime type the engine can hold:
//! scalars (boolean, integer, float, decimal, text), temporal values (date,
//! time, datetime), and mutable containers (array, object). [`ValueKind`]
//! is the matching fieldless enumeration and doubles as the target type of
//! a parameter declaration.
//!
//! ```rust,ignore
//! use sift_value::{Value, ValueKind};
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert_eq!(v.to_string(), "42");
//! ```

mod convert;
mod display;
mod kind;
mod value;

pub use kind::ValueKind;
pub use value::{Array, Object, Value};
