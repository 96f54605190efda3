//! Prelude module for convenient imports.
//!
//! A single `use sift_param::prelude::*;` brings in the engine surface and
//! the value types declarations operate on.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sift_param::prelude::*;
//!
//! let mut body = Value::from(serde_json::json!({"word": "FOO"}));
//! Params::new(&mut body).param(
//!     "word",
//!     ValueKind::String,
//!     Options::new().transform(NamedTransform::Lowercase).min_length(3),
//! )?;
//! ```

pub use crate::engine::{Key, Params};
pub use crate::error::{InvalidParameterError, Result};
pub use crate::options::{DEFAULT_PRECISION, DefaultValue, NamedTransform, Options, Transform};

pub use sift_value::{Array, Object, Value, ValueKind};
