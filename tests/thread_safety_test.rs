//! Tests for sharing type descriptions across threads.

use std::sync::Arc;
use std::thread;

use conforms::{conforms, mismatch, validate_all, Predicate, TypeDescription, Value};
use serde_json::json;
use stillwater::Validation;

fn user_td() -> TypeDescription {
    let even = Predicate::named("even", |v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    TypeDescription::object([
        ("name", TypeDescription::STRING),
        ("age", even.into()),
    ])
}

#[test]
fn test_concurrent_matching() {
    let td = Arc::new(user_td());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let td = Arc::clone(&td);
            thread::spawn(move || {
                let suspect = Value::from(json!({"name": format!("User{}", i), "age": 20 + i}));
                let expected = i % 2 == 0;
                assert_eq!(conforms(&suspect, &td), expected);
                if !expected {
                    assert_eq!(mismatch(&suspect, &td).unwrap().path_string(), "root.age");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_parallel_batch_matches_sequential_results() {
    let td = user_td();
    let suspects: Vec<Value> = (0..500)
        .map(|i| Value::from(json!({"name": "u", "age": i})))
        .collect();

    let sequential: Vec<_> = suspects
        .iter()
        .enumerate()
        .filter(|(_, s)| !conforms(s, &td))
        .map(|(i, _)| format!("root[{}].age", i))
        .collect();

    let Validation::Failure(errors) = validate_all(&suspects, &td) else {
        panic!("Expected failures");
    };
    let parallel: Vec<_> = errors.iter().map(|e| e.path_string()).collect();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.len(), 250);
}
