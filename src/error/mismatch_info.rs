//! Mismatch reports.
//!
//! This module provides [`MismatchInfo`] for a single failed match and
//! [`Mismatches`] for accumulating reports from several suspects.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::PathArray;
use crate::td::TypeDescription;
use crate::value::Value;

/// The site of a failed match.
///
/// `MismatchInfo` captures:
/// - **actual_value**: the sub-value examined at the failure site (`undefined`
///   when a required property or index was missing)
/// - **expected_td**: the type description that rejected it
/// - **path**: the route from the root suspect to the failure site
///
/// It is built once by the matcher and never changes afterwards. Equality is
/// structural over all three fields.
///
/// # Example
///
/// ```rust
/// use conforms::{mismatch, PathArray, TypeDescription, Value};
/// use serde_json::json;
///
/// let td = TypeDescription::from_json(&json!({"foo": {"bar": ["string"]}})).unwrap();
/// let suspect = Value::from(json!({"foo": {"bar": ["a", 2]}}));
///
/// let info = mismatch(&suspect, &td).unwrap();
/// assert_eq!(info.path_string(), "root.foo.bar[1]");
/// assert_eq!(info.actual_value(), &Value::from(2));
/// assert_eq!(info.expected_td(), &TypeDescription::STRING);
/// assert_eq!(info.to_string(), "root.foo.bar[1]: expected 'string', got 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchInfo {
    actual_value: Value,
    expected_td: TypeDescription,
    path: PathArray,
}

impl MismatchInfo {
    /// Creates a mismatch report.
    pub fn new(actual_value: Value, expected_td: TypeDescription, path: PathArray) -> Self {
        Self {
            actual_value,
            expected_td,
            path,
        }
    }

    /// Returns the sub-value found at the failure site.
    pub fn actual_value(&self) -> &Value {
        &self.actual_value
    }

    /// Returns the type description that rejected the value.
    pub fn expected_td(&self) -> &TypeDescription {
        &self.expected_td
    }

    /// Returns the route from the root suspect to the failure site.
    pub fn path(&self) -> &PathArray {
        &self.path
    }

    /// Renders the path as an accessor expression, e.g. `root.foo['bar baz'][3]`.
    pub fn path_string(&self) -> String {
        self.path.path_string()
    }

    /// Returns a copy of this report relocated under `segment`.
    pub(crate) fn prefixed(&self, segment: crate::path::PathSegment) -> Self {
        Self {
            actual_value: self.actual_value.clone(),
            expected_td: self.expected_td.clone(),
            path: self.path.prefixed(segment),
        }
    }

    /// Splits the report into its parts.
    pub fn into_parts(self) -> (Value, TypeDescription, PathArray) {
        (self.actual_value, self.expected_td, self.path)
    }
}

impl Display for MismatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.path, self.expected_td, self.actual_value
        )
    }
}

impl std::error::Error for MismatchInfo {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MismatchInfo>();
    assert_sync::<MismatchInfo>();
};

/// A non-empty collection of mismatch reports.
///
/// `Mismatches` wraps a `NonEmptyVec<MismatchInfo>` so that it can serve as
/// the failure side of a `Validation`. It implements `Semigroup`, allowing
/// reports from separate batches to be combined.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatches(NonEmptyVec<MismatchInfo>);

impl Mismatches {
    /// Creates a collection holding a single report.
    pub fn single(info: MismatchInfo) -> Self {
        Self(NonEmptyVec::singleton(info))
    }

    /// Creates a collection from a vec, or `None` if it is empty.
    pub fn from_vec(infos: Vec<MismatchInfo>) -> Option<Self> {
        NonEmptyVec::from_vec(infos).map(Self)
    }

    /// Returns the number of reports.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the reports.
    pub fn iter(&self) -> impl Iterator<Item = &MismatchInfo> {
        self.0.iter()
    }

    /// Returns the first report.
    pub fn first(&self) -> &MismatchInfo {
        self.0.head()
    }

    /// Converts this collection into a `Vec<MismatchInfo>`.
    pub fn into_vec(self) -> Vec<MismatchInfo> {
        self.0.into_vec()
    }
}

impl Semigroup for Mismatches {
    fn combine(self, other: Self) -> Self {
        Mismatches(self.0.combine(other.0))
    }
}

impl Display for Mismatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} value(s) did not conform:", self.len())?;
        for (i, info) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, info)?;
        }
        Ok(())
    }
}

impl std::error::Error for Mismatches {}

impl IntoIterator for Mismatches {
    type Item = MismatchInfo;
    type IntoIter = std::vec::IntoIter<MismatchInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    fn info(path: PathArray) -> MismatchInfo {
        MismatchInfo::new(Value::from(0), TypeDescription::STRING, path)
    }

    #[test]
    fn test_path_string_of_root() {
        assert_eq!(info(PathArray::root()).path_string(), "root");
    }

    #[test]
    fn test_display_includes_all_parts() {
        let report = MismatchInfo::new(
            Value::Undefined,
            TypeDescription::NUMBER,
            PathArray::root().push_key("nested").push_index(3).push_key("obj"),
        );
        assert_eq!(
            report.to_string(),
            "root.nested[3].obj: expected 'number', got undefined"
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = info(PathArray::root().push_key("a"));
        let b = info(PathArray::root().push_key("a"));
        let c = info(PathArray::root().push_key("b"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_prefixed_keeps_value_and_td() {
        let moved = info(PathArray::root().push_key("id")).prefixed(PathSegment::index(2));
        assert_eq!(moved.path_string(), "root[2].id");
        assert_eq!(moved.actual_value(), &Value::from(0));
    }

    #[test]
    fn test_mismatches_combine() {
        let combined = Mismatches::single(info(PathArray::root().push_index(0)))
            .combine(Mismatches::single(info(PathArray::root().push_index(4))));
        assert_eq!(combined.len(), 2);
        assert!(!combined.is_empty());
        assert_eq!(combined.first().path_string(), "root[0]");

        let display = combined.to_string();
        assert!(display.contains("2 value(s) did not conform"));
        assert!(display.contains("2. root[4]: expected 'string', got 0"));
    }

    #[test]
    fn test_mismatches_from_empty_vec() {
        assert!(Mismatches::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_mismatches_from_vec_keeps_order() {
        let infos = vec![
            info(PathArray::root().push_index(2)),
            info(PathArray::root().push_index(0)),
            info(PathArray::root().push_index(7)),
        ];
        let mismatches = Mismatches::from_vec(infos.clone()).unwrap();
        assert_eq!(mismatches.len(), 3);
        assert_eq!(mismatches.first().path_string(), "root[2]");
        assert_eq!(mismatches.into_vec(), infos);
    }
}
