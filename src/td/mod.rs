//! Type descriptions.
//!
//! A [`TypeDescription`] is a declarative description of the shape a suspect
//! value must have. It is a closed sum type, so the matcher dispatches on it
//! exhaustively and never has to guess what kind of description it was given.
//!
//! # Example
//!
//! ```rust
//! use conforms::{optional, td_set, PrimitiveKind, TypeDescription};
//!
//! let user = TypeDescription::object([
//!     ("id", PrimitiveKind::Number.into()),
//!     ("login", PrimitiveKind::String.into()),
//!     ("email", optional(PrimitiveKind::String)),
//!     ("roles", TypeDescription::array([PrimitiveKind::String.into()]).into()),
//!     (
//!         "avatar",
//!         td_set([PrimitiveKind::String.into(), TypeDescription::NULL]).into(),
//!     ),
//! ]);
//!
//! assert_eq!(
//!     user.to_string(),
//!     "{ id: 'number', login: 'string', email?: 'string', roles: ['string'], avatar: 'string' | 'object' }"
//! );
//! ```

mod json;
mod predicate;
mod primitive;
mod property;

use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::path::{is_identifier, quote};
use crate::value::Value;

pub use predicate::{is_positive_integer, Predicate};
pub use primitive::PrimitiveKind;
pub use property::{optional, Property};

/// Declared properties of an object-shape, in declaration order.
pub type Shape = IndexMap<String, Property>;

/// Declarative description of the shape a suspect must have.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescription {
    /// Matches values whose kind equals the tag.
    Primitive(PrimitiveKind),

    /// Matches objects whose declared properties match.
    ///
    /// Declaration order decides which property is reported when several
    /// fail at once.
    Object(Shape),

    /// Matches arrays. The number of declared items selects the mode:
    /// - none: any array, elements are not inspected
    /// - one: every element must match it (homogeneous array)
    /// - more: each declared item matches the element at the same index (tuple)
    Array(Vec<TypeDescription>),

    /// Matches when at least one member matches, tried in insertion order.
    Set(Vec<TypeDescription>),

    /// Matches when the decision function returns true.
    Predicate(Predicate),
}

impl TypeDescription {
    pub const NUMBER: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Number);
    pub const STRING: TypeDescription = TypeDescription::Primitive(PrimitiveKind::String);
    pub const BOOLEAN: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Boolean);
    /// Objects, arrays and `null` all match this.
    pub const OBJECT: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Object);
    /// Same as [`TypeDescription::OBJECT`]; reads better where `null` is the intent.
    pub const NULL: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Object);
    pub const UNDEFINED: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Undefined);
    pub const FUNCTION: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Function);
    pub const SYMBOL: TypeDescription = TypeDescription::Primitive(PrimitiveKind::Symbol);
    pub const BIGINT: TypeDescription = TypeDescription::Primitive(PrimitiveKind::BigInt);

    /// Creates an object-shape from `(key, property)` pairs.
    ///
    /// A key declared twice keeps its first position and its last property;
    /// use [`TypeDescription::from_json`] for notation that rejects duplicates.
    pub fn object<K, P, I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<Property>,
    {
        TypeDescription::Object(
            properties
                .into_iter()
                .map(|(key, property)| (key.into(), property.into()))
                .collect(),
        )
    }

    /// Creates an array-shape from its declared items.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = TypeDescription>,
    {
        TypeDescription::Array(items.into_iter().collect())
    }

    /// Creates an array-shape that accepts any array.
    pub fn any_array() -> Self {
        TypeDescription::Array(Vec::new())
    }

    /// Creates a predicate type description.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        TypeDescription::Predicate(Predicate::new(test))
    }
}

/// Builds an alternation-set from an ordered sequence of type descriptions.
///
/// Members are tried in the given order.
pub fn td_set<I>(tds: I) -> TypeDescription
where
    I: IntoIterator<Item = TypeDescription>,
{
    TypeDescription::Set(tds.into_iter().collect())
}

impl From<PrimitiveKind> for TypeDescription {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescription::Primitive(kind)
    }
}

impl From<Predicate> for TypeDescription {
    fn from(predicate: Predicate) -> Self {
        TypeDescription::Predicate(predicate)
    }
}

impl Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescription::Primitive(kind) => write!(f, "'{}'", kind),
            TypeDescription::Object(shape) if shape.is_empty() => write!(f, "{{}}"),
            TypeDescription::Object(shape) => {
                write!(f, "{{ ")?;
                for (i, (key, property)) in shape.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if is_identifier(key) {
                        write!(f, "{}", key)?;
                    } else {
                        write!(f, "{}", quote(key))?;
                    }
                    let marker = if property.is_optional() { "?" } else { "" };
                    write!(f, "{}: {}", marker, property.td())?;
                }
                write!(f, " }}")
            }
            TypeDescription::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            TypeDescription::Set(members) if members.is_empty() => write!(f, "never"),
            TypeDescription::Set(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            TypeDescription::Predicate(predicate) => write!(f, "{}", predicate),
        }
    }
}
