//! Primitive kind tags.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::TdError;

/// The closed set of primitive kind tags a value can report.
///
/// A primitive-name type description matches exactly the values whose
/// [`Value::kind`](crate::Value::kind) equals the tag. No coercion happens:
/// `'23'` is a string, never a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Number,
    String,
    Boolean,
    /// Objects, arrays and `null`.
    Object,
    Undefined,
    Function,
    Symbol,
    BigInt,
}

impl PrimitiveKind {
    /// All tags, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Number,
        PrimitiveKind::String,
        PrimitiveKind::Boolean,
        PrimitiveKind::Object,
        PrimitiveKind::Undefined,
        PrimitiveKind::Function,
        PrimitiveKind::Symbol,
        PrimitiveKind::BigInt,
    ];

    /// Returns the tag's name.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Function => "function",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::BigInt => "bigint",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = TdError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| TdError::UnknownPrimitive(name.to_string()))
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
