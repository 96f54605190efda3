//! Declaration engine.
//!
//! [`Params`] borrows the caller's container and rewrites it in place, one
//! declaration at a time. Each declaration runs the same pipeline: read the
//! raw value, substitute a default, check presence, transform, coerce,
//! recurse into nested containers, validate, write back. Nested blocks
//! operate on the container slot itself, not a copy. The first failure
//! aborts the declaration; writes already made stay.

use std::fmt;

use sift_value::{Value, ValueKind};

use crate::coerce;
use crate::error::Result;
use crate::options::Options;
use crate::validate;

/// Address of one slot in a container: an object key or an array position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Named entry of an object.
    Name(String),
    /// Positional entry of an array.
    Index(usize),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Nested declaration block.
///
/// Invoked once per nested scope: for an object, once with `None`; for an
/// array, once per element — object elements get a `Params` over the element
/// itself, any other element gets a `Params` over the whole array plus the
/// element's index.
type Block<'b> = &'b mut dyn FnMut(&mut Params<'_>, Option<usize>) -> Result<()>;

/// A mutable view over one container being coerced and validated.
///
/// The container is an object or array `Value` owned by the caller; every
/// successful declaration overwrites the addressed slot with its coerced
/// result. Declarations on a non-container (or a mismatched key shape) read
/// as absent and write nowhere.
///
/// ```rust,ignore
/// let mut params = Value::from(json!({"price": "50"}));
/// Params::new(&mut params).param("price", ValueKind::Integer, Options::new().required())?;
/// ```
#[derive(Debug)]
pub struct Params<'a> {
    container: &'a mut Value,
}

impl<'a> Params<'a> {
    /// Wraps a container for declaration.
    pub fn new(container: &'a mut Value) -> Self {
        Self { container }
    }

    /// Declares one parameter: coerce the value at `key` to `target` and
    /// enforce `options`, writing the result back in place.
    pub fn param(
        &mut self,
        key: impl Into<Key>,
        target: ValueKind,
        options: Options,
    ) -> Result<()> {
        self.declare(key.into(), target, options, None)
    }

    /// Like [`param`](Self::param), with a nested block run against the
    /// coerced container before the remaining constraints.
    pub fn param_with<F>(
        &mut self,
        key: impl Into<Key>,
        target: ValueKind,
        options: Options,
        mut block: F,
    ) -> Result<()>
    where
        F: FnMut(&mut Params<'_>, Option<usize>) -> Result<()>,
    {
        self.declare(key.into(), target, options, Some(&mut block))
    }

    /// Reads the current value at `key`, if the container holds one.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        match (&*self.container, key.into()) {
            (Value::Object(object), Key::Name(name)) => object.get(&name),
            (Value::Array(array), Key::Index(index)) => array.get(index),
            _ => None,
        }
    }

    fn declare(
        &mut self,
        key: Key,
        target: ValueKind,
        options: Options,
        block: Option<Block<'_>>,
    ) -> Result<()> {
        let raw = self.read(&key);
        let was_present = raw.as_ref().is_some_and(|v| !v.is_null());

        let mut value = raw.unwrap_or(Value::Null);
        if value.is_null() {
            if let Some(default) = &options.default {
                value = default.resolve();
            }
        }

        // Presence is judged on the raw value; a substituted default does
        // not satisfy `required`.
        validate::required(&key, was_present, &options)?;

        // Optional and still null: the container stays exactly as supplied
        // (absent stays absent, explicit null stays null).
        if value.is_null() {
            return Ok(());
        }

        if let Some(transform) = &options.transform {
            value = transform.apply(&key, value)?;
        }

        value = coerce::coerce(value, target, &options)?;

        // Nested rules mutate the slot directly, so element writes made
        // before a failing element survive (fail-fast, not transactional).
        if let Some(block) = block {
            self.write(&key, value);
            if let Some(slot) = self.slot_mut(&key) {
                Self::recurse(slot, block)?;
                validate::constraints(&key, slot, &options)?;
            }
            self.rename(&key, options.rename_to);
            return Ok(());
        }

        validate::constraints(&key, &value, &options)?;

        self.write(&key, value);
        self.rename(&key, options.rename_to);
        Ok(())
    }

    fn recurse(value: &mut Value, block: Block<'_>) -> Result<()> {
        if value.is_object() {
            let mut child = Params::new(value);
            return block(&mut child, None);
        }
        if value.is_array() {
            let len = value.as_array().map_or(0, Vec::len);
            for index in 0..len {
                let element_is_object = value
                    .as_array()
                    .and_then(|array| array.get(index))
                    .is_some_and(Value::is_object);
                if element_is_object {
                    if let Some(element) =
                        value.as_array_mut().and_then(|array| array.get_mut(index))
                    {
                        let mut child = Params::new(element);
                        block(&mut child, None)?;
                    }
                } else {
                    let mut child = Params::new(value);
                    block(&mut child, Some(index))?;
                }
            }
        }
        Ok(())
    }

    fn read(&self, key: &Key) -> Option<Value> {
        match (&*self.container, key) {
            (Value::Object(object), Key::Name(name)) => object.get(name).cloned(),
            (Value::Array(array), Key::Index(index)) => array.get(*index).cloned(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match (&mut *self.container, key) {
            (Value::Object(object), Key::Name(name)) => object.get_mut(name),
            (Value::Array(array), Key::Index(index)) => array.get_mut(*index),
            _ => None,
        }
    }

    fn write(&mut self, key: &Key, value: Value) {
        match (&mut *self.container, key) {
            (Value::Object(object), Key::Name(name)) => {
                object.insert(name.clone(), value);
            }
            (Value::Array(array), Key::Index(index)) => {
                if let Some(slot) = array.get_mut(*index) {
                    *slot = value;
                }
            }
            _ => {}
        }
    }

    // Moves the written value under its new name. Renaming applies to
    // object containers only.
    fn rename(&mut self, key: &Key, new_name: Option<String>) {
        if let Some(new_name) = new_name {
            if let Some(moved) = self.take(key) {
                self.write(&Key::Name(new_name), moved);
            }
        }
    }

    fn take(&mut self, key: &Key) -> Option<Value> {
        match (&mut *self.container, key) {
            (Value::Object(object), Key::Name(name)) => object.shift_remove(name),
            _ => None,
        }
    }
}
