//! Object-shape properties and the optional marker.

use crate::td::{Predicate, PrimitiveKind, TypeDescription};

/// A property declared by an object-shape type description.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    td: TypeDescription,
    optional: bool,
}

impl Property {
    /// Declares a property that must be present.
    pub fn required(td: impl Into<TypeDescription>) -> Self {
        Self {
            td: td.into(),
            optional: false,
        }
    }

    /// Returns the type description the property's value must match.
    pub fn td(&self) -> &TypeDescription {
        &self.td
    }

    /// Returns true if the property may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Wraps `td` so that the enclosing property may be absent.
///
/// The result is a [`Property`], so the marker can only appear directly
/// under an object-shape key.
///
/// If the property is present its value must still match `td`.
///
/// # Example
///
/// ```rust
/// use conforms::{conforms, optional, PrimitiveKind, TypeDescription, Value};
/// use serde_json::json;
///
/// let td = TypeDescription::object([
///     ("prop", PrimitiveKind::String.into()),
///     ("opt", optional(PrimitiveKind::Number)),
/// ]);
///
/// assert!(conforms(&Value::from(json!({"prop": "s"})), &td));
/// assert!(conforms(&Value::from(json!({"prop": "s", "opt": 23})), &td));
/// assert!(!conforms(&Value::from(json!({"prop": "s", "opt": "23"})), &td));
/// ```
pub fn optional(td: impl Into<TypeDescription>) -> Property {
    Property {
        td: td.into(),
        optional: true,
    }
}

impl From<TypeDescription> for Property {
    fn from(td: TypeDescription) -> Self {
        Property::required(td)
    }
}

impl From<PrimitiveKind> for Property {
    fn from(kind: PrimitiveKind) -> Self {
        Property::required(kind)
    }
}

impl From<Predicate> for Property {
    fn from(predicate: Predicate) -> Self {
        Property::required(predicate)
    }
}
