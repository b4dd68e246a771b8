//! Checking many suspects at once.
//!
//! Matching is pure, so independent suspects are checked in parallel with
//! rayon. Unlike a single match, a batch does not stop at the first failing
//! suspect: every failing suspect contributes one report.

use rayon::prelude::*;
use stillwater::Validation;

use crate::error::{MismatchInfo, Mismatches};
use crate::matcher::Matcher;
use crate::path::PathSegment;
use crate::td::TypeDescription;
use crate::value::Value;

impl Matcher {
    /// Checks every suspect against `td`, in parallel.
    ///
    /// Each report's path starts with the index of its suspect, and reports
    /// are ordered by that index.
    pub fn validate_all(
        &self,
        suspects: &[Value],
        td: &TypeDescription,
    ) -> Validation<(), Mismatches> {
        let failures: Vec<MismatchInfo> = suspects
            .par_iter()
            .enumerate()
            .filter_map(|(i, suspect)| {
                self.mismatch(suspect, td)
                    .map(|info| info.prefixed(PathSegment::index(i)))
            })
            .collect();

        match Mismatches::from_vec(failures) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }
}

/// Checks every suspect against `td` in duck mode, in parallel.
///
/// # Example
///
/// ```rust
/// use conforms::{validate_all, TypeDescription, Value};
/// use serde_json::json;
/// use stillwater::Validation;
///
/// let td = TypeDescription::from_json(&json!({"id": "number"})).unwrap();
/// let rows = [json!({"id": 1}), json!({"id": "2"}), json!({})].map(Value::from);
///
/// let Validation::Failure(errors) = validate_all(&rows, &td) else {
///     panic!("expected failures");
/// };
/// let paths: Vec<_> = errors.iter().map(|e| e.path_string()).collect();
/// assert_eq!(paths, ["root[1].id", "root[2].id"]);
/// ```
pub fn validate_all(suspects: &[Value], td: &TypeDescription) -> Validation<(), Mismatches> {
    Matcher::duck().validate_all(suspects, td)
}
