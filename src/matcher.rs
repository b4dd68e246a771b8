//! The structural matcher.
//!
//! [`Matcher`] walks a suspect and a type description in lockstep, depth
//! first, and stops at the first failing site. Siblings are visited in
//! declaration order (object properties, tuple items) or ascending index
//! order (homogeneous arrays), so the reported site is deterministic even
//! when several parts of the suspect are wrong at once.

use tracing::trace;

use crate::error::MismatchInfo;
use crate::path::PathArray;
use crate::td::{Predicate, PrimitiveKind, Shape, TypeDescription};
use crate::value::{Value, UNDEFINED};

/// How undeclared object properties are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Undeclared properties are ignored (duck typing).
    #[default]
    Duck,
    /// Any undeclared property fails the enclosing object.
    Exact,
}

/// Matches suspects against type descriptions in a fixed [`MatchMode`].
///
/// A matcher holds no state besides its mode and is freely shared across
/// threads.
///
/// # Example
///
/// ```rust
/// use conforms::{Matcher, TypeDescription, Value};
/// use serde_json::json;
///
/// let td = TypeDescription::from_json(&json!({"prop": "number"})).unwrap();
/// let suspect = Value::from(json!({"prop": 1, "ex": true}));
///
/// assert!(Matcher::duck().conforms(&suspect, &td));
///
/// let info = Matcher::exact().mismatch(&suspect, &td).unwrap();
/// assert_eq!(info.path_string(), "root");
/// assert_eq!(info.actual_value(), &suspect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Matcher {
    mode: MatchMode,
}

impl Matcher {
    /// Creates a matcher for the given mode.
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Creates a matcher that tolerates undeclared properties.
    pub fn duck() -> Self {
        Self::new(MatchMode::Duck)
    }

    /// Creates a matcher that rejects undeclared properties.
    pub fn exact() -> Self {
        Self::new(MatchMode::Exact)
    }

    /// Returns the matching mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if `suspect` matches `td`.
    pub fn conforms(&self, suspect: &Value, td: &TypeDescription) -> bool {
        self.mismatch_at(suspect, td, &PathArray::root()).is_none()
    }

    /// Returns the first failing site, or `None` if `suspect` matches `td`.
    pub fn mismatch(&self, suspect: &Value, td: &TypeDescription) -> Option<MismatchInfo> {
        let info = self.mismatch_at(suspect, td, &PathArray::root())?;
        trace!(
            mode = ?self.mode,
            path = %info.path(),
            expected = %info.expected_td(),
            "suspect does not conform"
        );
        Some(info)
    }

    /// Matches `suspect`, found at `path`, against `td`.
    ///
    /// Reported paths start with `path`.
    pub fn mismatch_at(
        &self,
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        match td {
            TypeDescription::Primitive(kind) => Self::check_primitive(*kind, suspect, td, path),
            TypeDescription::Object(shape) => self.check_object(shape, suspect, td, path),
            TypeDescription::Array(items) => self.check_array(items, suspect, td, path),
            TypeDescription::Set(members) => self.check_set(members, suspect, td, path),
            TypeDescription::Predicate(predicate) => {
                Self::check_predicate(predicate, suspect, td, path)
            }
        }
    }

    fn check_primitive(
        kind: PrimitiveKind,
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        if suspect.kind() == kind {
            None
        } else {
            Some(failure(suspect, td, path))
        }
    }

    fn check_object(
        &self,
        shape: &Shape,
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        let Value::Object(map) = suspect else {
            return Some(failure(suspect, td, path));
        };

        if self.mode == MatchMode::Exact && map.keys().any(|key| !shape.contains_key(key)) {
            return Some(failure(suspect, td, path));
        }

        shape.iter().find_map(|(key, property)| match map.get(key) {
            None if property.is_optional() => None,
            value => self.mismatch_at(
                value.unwrap_or(&UNDEFINED),
                property.td(),
                &path.push_key(key.as_str()),
            ),
        })
    }

    fn check_array(
        &self,
        items: &[TypeDescription],
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        let Value::Array(elements) = suspect else {
            return Some(failure(suspect, td, path));
        };

        match items {
            [] => None,
            [item] => elements
                .iter()
                .enumerate()
                .find_map(|(i, element)| self.mismatch_at(element, item, &path.push_index(i))),
            tuple => tuple.iter().enumerate().find_map(|(i, item)| {
                let element = elements.get(i).unwrap_or(&UNDEFINED);
                self.mismatch_at(element, item, &path.push_index(i))
            }),
        }
    }

    fn check_set(
        &self,
        members: &[TypeDescription],
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        if members
            .iter()
            .any(|member| self.mismatch_at(suspect, member, path).is_none())
        {
            None
        } else {
            Some(failure(suspect, td, path))
        }
    }

    fn check_predicate(
        predicate: &Predicate,
        suspect: &Value,
        td: &TypeDescription,
        path: &PathArray,
    ) -> Option<MismatchInfo> {
        if predicate.test(suspect) {
            None
        } else {
            Some(failure(suspect, td, path))
        }
    }
}

fn failure(suspect: &Value, td: &TypeDescription, path: &PathArray) -> MismatchInfo {
    MismatchInfo::new(suspect.clone(), td.clone(), path.clone())
}
