//! Public matching operations.
//!
//! These are thin entry points over [`Matcher`]: the duck-typed ones tolerate
//! undeclared properties, the `exact` ones reject them.

use std::borrow::Borrow;

use stillwater::Validation;

use crate::error::MismatchInfo;
use crate::matcher::Matcher;
use crate::td::TypeDescription;
use crate::value::Value;
use crate::ConformResult;

/// Returns true if `suspect` matches `td`, ignoring undeclared properties.
///
/// Always agrees with [`mismatch`]: `conforms(s, td) == mismatch(s, td).is_none()`.
///
/// # Example
///
/// ```rust
/// use conforms::{conforms, td_set, TypeDescription, Value};
/// use serde_json::json;
///
/// let td = td_set([
///     TypeDescription::from_json(&json!({"obj": "number"})).unwrap(),
///     TypeDescription::STRING,
///     TypeDescription::NUMBER,
///     TypeDescription::from_json(&json!(["boolean"])).unwrap(),
/// ]);
///
/// assert!(conforms(&Value::from(42), &td));
/// assert!(!conforms(&Value::from(json!({})), &td));
/// ```
pub fn conforms(suspect: &Value, td: &TypeDescription) -> bool {
    Matcher::duck().conforms(suspect, td)
}

/// Returns the first failing site of `suspect` against `td`, or `None` if it
/// matches. Undeclared properties are ignored.
pub fn mismatch(suspect: &Value, td: &TypeDescription) -> Option<MismatchInfo> {
    Matcher::duck().mismatch(suspect, td)
}

/// Same as [`mismatch`]; the name stresses that excess properties are tolerated.
pub fn duck_mismatch(suspect: &Value, td: &TypeDescription) -> Option<MismatchInfo> {
    mismatch(suspect, td)
}

/// Returns true if `suspect` matches `td` and no object along the way has
/// properties that `td` does not declare.
///
/// Optional properties stay optional.
pub fn exactly_conforms(suspect: &Value, td: &TypeDescription) -> bool {
    Matcher::exact().conforms(suspect, td)
}

/// Strict counterpart of [`mismatch`].
///
/// An object with undeclared properties is reported at its own path, with the
/// whole object as the actual value and its object-shape as the expected one.
pub fn exact_mismatch(suspect: &Value, td: &TypeDescription) -> Option<MismatchInfo> {
    Matcher::exact().mismatch(suspect, td)
}

/// Returns `suspect` if it conforms to `td`, otherwise `fallback`.
///
/// Nothing is merged: the result is one of the two arguments, untouched.
///
/// # Example
///
/// ```rust
/// use conforms::{default_if_not_conforms, is_positive_integer, Value};
///
/// let td = is_positive_integer();
/// let fallback = Value::from(78);
///
/// assert_eq!(default_if_not_conforms(&td, &Value::from(0), &fallback), &fallback);
/// assert_eq!(default_if_not_conforms(&td, Value::from(32), Value::from(1)), Value::from(32));
/// ```
pub fn default_if_not_conforms<T>(td: &TypeDescription, suspect: T, fallback: T) -> T
where
    T: Borrow<Value>,
{
    if conforms(suspect.borrow(), td) {
        suspect
    } else {
        fallback
    }
}

/// Checks `suspect` against `td` and returns the outcome as a `Validation`.
///
/// # Example
///
/// ```rust
/// use conforms::{validate, TypeDescription, Value};
/// use stillwater::Validation;
///
/// let suspect = Value::from("lala");
/// match validate(&suspect, &TypeDescription::NUMBER) {
///     Validation::Success(_) => unreachable!(),
///     Validation::Failure(info) => assert_eq!(info.path_string(), "root"),
/// }
/// ```
pub fn validate<'a>(suspect: &'a Value, td: &TypeDescription) -> ConformResult<'a> {
    match mismatch(suspect, td) {
        None => Validation::Success(suspect),
        Some(info) => Validation::Failure(info),
    }
}
