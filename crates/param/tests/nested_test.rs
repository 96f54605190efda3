//! Nested declaration behavior: hashes, arrays of hashes, arrays of
//! primitives, and arrays of arrays, with failures propagating out of any
//! depth.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use sift_param::prelude::*;

fn body(v: serde_json::Value) -> Value {
    Value::from(v)
}

// ==================== Nested hashes ====================

#[test]
fn nested_hash_declarations_rewrite_in_place() {
    let mut container = body(json!({"book": {"title": "One Hundred Years", "price": "50"}}));
    Params::new(&mut container)
        .param_with(
            "book",
            ValueKind::Object,
            Options::new().required(),
            |book, _| {
                book.param("title", ValueKind::String, Options::new().required())?;
                book.param("price", ValueKind::Integer, Options::new().required())
            },
        )
        .unwrap();
    assert_eq!(
        container,
        body(json!({"book": {"title": "One Hundred Years", "price": 50}}))
    );
}

#[test]
fn nested_numeric_targets_coerce_in_place() {
    let mut container = body(json!({"foo": {"bar": "12345.67890123456", "baz": "9.9"}}));
    let mut params = Params::new(&mut container);
    params
        .param_with(
            "foo",
            ValueKind::Object,
            Options::new().required(),
            |foo, _| {
                foo.param("bar", ValueKind::Decimal, Options::new().required())?;
                foo.param("baz", ValueKind::Float, Options::new().required())
            },
        )
        .unwrap();

    let foo = params.get("foo").and_then(Value::as_object).unwrap();
    assert_eq!(
        foo.get("bar").and_then(Value::as_decimal),
        Some("12345.678901235".parse::<Decimal>().unwrap())
    );
    assert_eq!(foo.get("baz").and_then(Value::as_float), Some(9.9));
}

#[test]
fn missing_inner_required_key_raises() {
    let mut container = body(json!({"book": {"title": "One Hundred Years"}}));
    let err = Params::new(&mut container)
        .param_with(
            "book",
            ValueKind::Object,
            Options::new().required(),
            |book, _| book.param("price", ValueKind::Integer, Options::new().required()),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter price is required");
}

#[test]
fn missing_required_outer_hash_raises_before_the_block() {
    let mut container = body(json!({}));
    let err = Params::new(&mut container)
        .param_with(
            "book",
            ValueKind::Object,
            Options::new().required(),
            |book, _| book.param("price", ValueKind::Integer, Options::new().required()),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter book is required");
}

#[test]
fn absent_optional_outer_hash_skips_the_block() {
    let mut container = body(json!({}));
    Params::new(&mut container)
        .param_with("book", ValueKind::Object, Options::new(), |book, _| {
            book.param("price", ValueKind::Integer, Options::new().required())
        })
        .unwrap();
    assert_eq!(container, body(json!({})));
}

#[test]
fn inner_optional_keys_may_stay_absent() {
    let mut container = body(json!({"book": {"title": "x"}}));
    Params::new(&mut container)
        .param_with("book", ValueKind::Object, Options::new(), |book, _| {
            book.param("title", ValueKind::String, Options::new())?;
            book.param("price", ValueKind::Integer, Options::new())
        })
        .unwrap();
    assert_eq!(container, body(json!({"book": {"title": "x"}})));
}

#[test]
fn nested_constraints_report_the_inner_key() {
    let mut container = body(json!({"book": {"price": "200"}}));
    let err = Params::new(&mut container)
        .param_with("book", ValueKind::Object, Options::new(), |book, _| {
            book.param("price", ValueKind::Integer, Options::new().max(150))
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter price cannot be greater than 150");
    assert_eq!(err.param.as_deref(), Some("price"));
}

#[test]
fn hashes_nest_arbitrarily_deep() {
    let mut container = body(json!({"book": {"author": {"age": "70"}}}));
    Params::new(&mut container)
        .param_with("book", ValueKind::Object, Options::new(), |book, _| {
            book.param_with("author", ValueKind::Object, Options::new(), |author, _| {
                author.param("age", ValueKind::Integer, Options::new())
            })
        })
        .unwrap();
    assert_eq!(container, body(json!({"book": {"author": {"age": 70}}})));
}

// ==================== Arrays of hashes ====================

#[test]
fn array_of_hashes_runs_the_block_per_element() {
    let mut container = body(json!({"books": [{"price": "10"}, {"price": "20"}]}));
    Params::new(&mut container)
        .param_with(
            "books",
            ValueKind::Array,
            Options::new().required(),
            |book, index| {
                assert_eq!(index, None);
                book.param("price", ValueKind::Integer, Options::new().required())
            },
        )
        .unwrap();
    assert_eq!(
        container,
        body(json!({"books": [{"price": 10}, {"price": 20}]}))
    );
}

#[test]
fn failing_element_aborts_but_earlier_writes_survive() {
    let mut container = body(json!({"books": [{"price": "10"}, {"price": "x"}]}));
    let err = Params::new(&mut container)
        .param_with("books", ValueKind::Array, Options::new(), |book, _| {
            book.param("price", ValueKind::Integer, Options::new())
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "'x' is not a valid Integer");

    // Fail-fast is not transactional: the first element was rewritten.
    assert_eq!(
        container,
        body(json!({"books": [{"price": 10}, {"price": "x"}]}))
    );
}

// ==================== Arrays of primitives ====================

#[test]
fn primitive_elements_are_addressed_by_index() {
    let mut container = body(json!({"array": ["1", "2"]}));
    Params::new(&mut container)
        .param_with(
            "array",
            ValueKind::Array,
            Options::new().required(),
            |array, index| {
                let index = index.expect("primitive elements carry an index");
                array.param(index, ValueKind::Integer, Options::new().required())
            },
        )
        .unwrap();
    assert_eq!(container, body(json!({"array": [1, 2]})));
}

#[test]
fn null_element_fails_a_required_element_rule() {
    let mut container = body(json!({"array": ["1", null]}));
    let err = Params::new(&mut container)
        .param_with("array", ValueKind::Array, Options::new(), |array, index| {
            let index = index.expect("primitive elements carry an index");
            array.param(index, ValueKind::Integer, Options::new().required())
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter 1 is required");
}

#[test]
fn delimited_text_coerces_then_recurses_per_element() {
    let mut container = body(json!({"ids": "1,2,3"}));
    Params::new(&mut container)
        .param_with("ids", ValueKind::Array, Options::new(), |ids, index| {
            let index = index.expect("primitive elements carry an index");
            ids.param(index, ValueKind::Integer, Options::new())
        })
        .unwrap();
    assert_eq!(container, body(json!({"ids": [1, 2, 3]})));
}

// ==================== Arrays of arrays ====================

#[test]
fn arrays_of_arrays_recurse_positionally() {
    let mut container = body(json!({"array": [["1", "2"], ["3", "4"]]}));
    Params::new(&mut container)
        .param_with("array", ValueKind::Array, Options::new(), |outer, index| {
            let index = index.expect("array elements carry an index");
            outer.param_with(index, ValueKind::Array, Options::new(), |inner, element| {
                let element = element.expect("primitive elements carry an index");
                inner.param(element, ValueKind::Integer, Options::new())
            })
        })
        .unwrap();
    assert_eq!(container, body(json!({"array": [[1, 2], [3, 4]]})));
}

// ==================== Container constraints ====================

#[test]
fn array_length_constraints_apply_to_elements() {
    let mut container = body(json!({"ids": ["1", "2", "3"]}));
    let err = Params::new(&mut container)
        .param("ids", ValueKind::Array, Options::new().max_length(2))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter ids cannot have length greater than 2"
    );
}

#[test]
fn blank_false_rejects_an_empty_nested_hash() {
    let mut container = body(json!({"book": {}}));
    let err = Params::new(&mut container)
        .param("book", ValueKind::Object, Options::new().blank(false))
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter book cannot be blank");
}
