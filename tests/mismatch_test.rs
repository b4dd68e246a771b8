//! Integration tests for mismatch reports.

use conforms::{
    duck_mismatch, is_positive_integer, mismatch, optional, td_set, Function, MismatchInfo,
    PathArray, PathSegment, Symbol, TypeDescription, Value,
};
use serde_json::json;

fn td(json: serde_json::Value) -> TypeDescription {
    TypeDescription::from_json(&json).unwrap()
}

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn path(segments: Vec<PathSegment>) -> PathArray {
    PathArray::from(segments)
}

#[test]
fn test_good_matches_yield_none() {
    assert!(mismatch(&Value::from(23), &TypeDescription::NUMBER).is_none());
    assert!(mismatch(&Value::from(false), &TypeDescription::BOOLEAN).is_none());
    assert!(mismatch(&Value::Null, &TypeDescription::OBJECT).is_none());
    assert!(mismatch(&Value::Undefined, &TypeDescription::UNDEFINED).is_none());
    assert!(mismatch(
        &Value::from(Function::new("", |_| Value::Undefined)),
        &TypeDescription::FUNCTION
    )
    .is_none());
    assert!(mismatch(&Value::from(Symbol::new(None)), &TypeDescription::SYMBOL).is_none());
    assert!(duck_mismatch(
        &v(json!({
            "prop": "lala",
            "prop2": true,
            "obj": { "obj": [23, 43] },
            "someExcessProperty": null
        })),
        &td(json!({
            "prop": "string",
            "prop2": "boolean",
            "obj": { "obj": ["number", "number"] }
        }))
    )
    .is_none());
    assert!(mismatch(&v(json!([])), &td(json!([{"id": "number"}]))).is_none());
    assert!(mismatch(&v(json!({})), &td(json!({}))).is_none());
}

#[test]
fn test_root_primitive_mismatch() {
    assert_eq!(
        mismatch(&Value::from(true), &TypeDescription::NUMBER),
        Some(MismatchInfo::new(
            Value::from(true),
            TypeDescription::NUMBER,
            PathArray::root()
        ))
    );
}

#[test]
fn test_non_array_against_array_shapes_reports_whole_td() {
    let obj = v(json!({"someObj": true}));

    assert_eq!(
        mismatch(&obj, &TypeDescription::any_array()),
        Some(MismatchInfo::new(
            obj.clone(),
            TypeDescription::any_array(),
            PathArray::root()
        ))
    );

    let homogeneous = td(json!([{"objects": "number"}]));
    assert_eq!(
        mismatch(&obj, &homogeneous),
        Some(MismatchInfo::new(obj.clone(), homogeneous, PathArray::root()))
    );
}

#[test]
fn test_set_mismatch_reports_whole_set_and_suspect() {
    let obj = v(json!({"someObj": true}));
    let set = td_set([
        td(json!({"obj": "number"})),
        TypeDescription::STRING,
        TypeDescription::NUMBER,
        td(json!(["boolean"])),
    ]);

    assert_eq!(
        mismatch(&obj, &set),
        Some(MismatchInfo::new(obj.clone(), set, PathArray::root()))
    );
}

#[test]
fn test_nested_object_path() {
    let suspect = v(json!({"someProp": {"nested": {"moreNested": 22}}}));
    let td = td(json!({"someProp": {"nested": {"moreNested": "string"}}}));

    assert_eq!(
        mismatch(&suspect, &td),
        Some(MismatchInfo::new(
            Value::from(22),
            TypeDescription::STRING,
            path(vec!["someProp".into(), "nested".into(), "moreNested".into()])
        ))
    );
}

#[test]
fn test_missing_key_under_homogeneous_array() {
    let suspect = v(json!({
        "nested": {
            "nestedArray": [{"obj": 22}, {"obj": 32}, {"obj": 56}, {"obk": 43}]
        }
    }));
    let td = td(json!({"nested": {"nestedArray": [{"obj": "number"}]}}));

    assert_eq!(
        mismatch(&suspect, &td),
        Some(MismatchInfo::new(
            Value::Undefined,
            TypeDescription::NUMBER,
            path(vec![
                "nested".into(),
                "nestedArray".into(),
                3usize.into(),
                "obj".into()
            ])
        ))
    );
}

#[test]
fn test_predicate_mismatch_reports_shared_predicate() {
    let td = TypeDescription::object([("id", is_positive_integer())]);

    assert_eq!(
        mismatch(&v(json!({"id": 0})), &td),
        Some(MismatchInfo::new(
            Value::from(0),
            is_positive_integer(),
            PathArray::root().push_key("id")
        ))
    );
}

#[test]
fn test_first_declared_failure_wins() {
    let td = td(json!({"b": "number", "a": "number"}));
    let info = mismatch(&v(json!({"a": "x", "b": "y"})), &td).unwrap();
    assert_eq!(info.path_string(), "root.b");
    assert_eq!(info.actual_value(), &Value::from("y"));
}

#[test]
fn test_first_failing_index_wins() {
    let info = mismatch(&v(json!([1, "a", "b"])), &td(json!(["number"]))).unwrap();
    assert_eq!(info.path_string(), "root[1]");
}

#[test]
fn test_excess_properties_do_not_fail_duck_mismatch() {
    assert!(mismatch(&v(json!({"prop": 1, "ex": true})), &td(json!({"prop": "number"}))).is_none());
}

#[test]
fn test_optional_properties() {
    let guard = TypeDescription::predicate(|s| s.as_str() == Some("s"));
    let td = TypeDescription::object([
        ("prop", guard.clone().into()),
        ("opt", optional(TypeDescription::NUMBER)),
    ]);
    assert!(mismatch(&v(json!({"prop": "s"})), &td).is_none());
    assert!(mismatch(&v(json!({"prop": "s", "opt": 23})), &td).is_none());

    let info = mismatch(&v(json!({"prop": "s", "opt": "23"})), &td).unwrap();
    assert_eq!(info.path_string(), "root.opt");
    assert_eq!(info.expected_td(), &TypeDescription::NUMBER);

    let two = TypeDescription::object([
        ("prop", guard.into()),
        ("opt", optional(TypeDescription::NUMBER)),
        ("opt2", optional(TypeDescription::STRING)),
    ]);
    assert!(mismatch(&v(json!({"prop": "s"})), &two).is_none());
}

#[test]
fn test_readme_example_path_string() {
    let suspect = v(json!({
        "foo": { "bar": { "twenty two": [{"prop": "str"}, {"prop": -23}] } }
    }));
    let td = td(json!({"foo": {"bar": {"twenty two": [{"prop": "string"}]}}}));

    assert_eq!(
        mismatch(&suspect, &td).unwrap().path_string(),
        "root.foo.bar['twenty two'][1].prop"
    );
}
