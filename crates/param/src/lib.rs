//! # sift-param
//!
//! Declarative coercion and validation for loosely typed parameter
//! containers.
//!
//! A host hands [`Params`] a mutable object or array of [`sift_value::Value`]
//! (typically converted from JSON) and declares, one key at a time, the type
//! the value must become and the constraints it must satisfy. Values are
//! coerced and rewritten in place; the first failure aborts with an
//! [`InvalidParameterError`] carrying an exact, deterministic message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sift_param::prelude::*;
//!
//! let mut params = Value::from(serde_json::json!({"price": "50", "q": "  Hi  "}));
//! let mut params = Params::new(&mut params);
//!
//! params.param("price", ValueKind::Integer, Options::new().required().within(1, 100))?;
//! params.param("q", ValueKind::String, Options::new().transform(NamedTransform::Trim))?;
//! ```
//!
//! ## Nested containers
//!
//! [`Params::param_with`] recurses into a coerced hash or array: the block
//! receives a child `Params` over the sub-container (and, for array
//! elements that are not objects, the element's index).

pub mod prelude;

mod coerce;
mod engine;
mod error;
mod options;
mod validate;

pub use engine::{Key, Params};
pub use error::{InvalidParameterError, Result};
pub use options::{DEFAULT_PRECISION, DefaultValue, NamedTransform, Options, Transform};
