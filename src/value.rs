//! Dynamically typed suspect values.
//!
//! [`Value`] models the untyped data a type description is checked against.
//! Besides the JSON kinds it carries `undefined`, big integers, symbols and
//! functions so that every primitive tag has values of its own.

use std::fmt::{self, Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::path::{format_number, is_identifier, quote};
use crate::td::PrimitiveKind;

/// Property map of an object value, in insertion order.
pub type Object = IndexMap<String, Value>;

/// A dynamically typed value.
///
/// # Example
///
/// ```rust
/// use conforms::{PrimitiveKind, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({"id": 7, "tags": ["a"]}));
/// assert_eq!(value.kind(), PrimitiveKind::Object);
/// assert_eq!(value.get("id"), Some(&Value::Number(7.0)));
/// assert_eq!(value.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value; what a missing property or index reads as.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Vec<Value>),
    Object(Object),
}

/// Shared `undefined` handed out for missing properties and indices.
pub(crate) static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Returns the primitive kind of this value.
    ///
    /// `null`, arrays and objects all report [`PrimitiveKind::Object`].
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Value::Undefined => PrimitiveKind::Undefined,
            Value::Null | Value::Array(_) | Value::Object(_) => PrimitiveKind::Object,
            Value::Bool(_) => PrimitiveKind::Boolean,
            Value::Number(_) => PrimitiveKind::Number,
            Value::BigInt(_) => PrimitiveKind::BigInt,
            Value::String(_) => PrimitiveKind::String,
            Value::Symbol(_) => PrimitiveKind::Symbol,
            Value::Function(_) => PrimitiveKind::Function,
        }
    }

    /// Looks up a property of an object value.
    ///
    /// Returns `None` for non-objects and for absent keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns true if this is `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the elements of an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the property map of an object value.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the number held by a number value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text held by a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{}", quote(s)),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Function(func) => write!(f, "{}", func),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) if map.is_empty() => write!(f, "{{}}"),
            Value::Object(map) => {
                write!(f, "{{ ")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if is_identifier(key) {
                        write!(f, "{}: {}", key, value)?;
                    } else {
                        write!(f, "{}: {}", quote(key), value)?;
                    }
                }
                write!(f, " }}")
            }
        }
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique, identity-compared token value.
///
/// Every call to [`Symbol::new`] yields a symbol distinct from all others,
/// even when the descriptions are equal.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// Returns the description given at creation.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value, compared by identity.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    call: Arc<Callable>,
}

impl Function {
    /// Wraps a closure as a function value.
    pub fn new<F>(name: &str, f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            call: Arc::new(f),
        }
    }

    /// Returns the function's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.call), Arc::as_ptr(&other.call))
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name)
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kinds() {
        assert_eq!(Value::Undefined.kind(), PrimitiveKind::Undefined);
        assert_eq!(Value::Null.kind(), PrimitiveKind::Object);
        assert_eq!(Value::from(vec![1, 2]).kind(), PrimitiveKind::Object);
        assert_eq!(Value::from(2323_i128).kind(), PrimitiveKind::BigInt);
        assert_eq!(Value::from(Symbol::new(None)).kind(), PrimitiveKind::Symbol);
        assert_eq!(
            Value::from(Function::new("f", |_| Value::Undefined)).kind(),
            PrimitiveKind::Function
        );
    }

    #[test]
    fn test_from_json_preserves_structure() {
        let value = Value::from(json!({"a": [1, "x", null], "b": true}));
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a, &[Value::Number(1.0), Value::from("x"), Value::Null][..]);
        assert_eq!(value.get("b"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new(Some("tag"));
        let b = Symbol::new(Some("tag"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let f = Function::new("f", |_| Value::Null);
        let g = Function::new("f", |_| Value::Null);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
        assert_eq!(f.call(&[]), Value::Null);
    }

    #[test]
    fn test_display() {
        let value = Value::from(json!({"a": 1, "b c": ["x", null]}));
        assert_eq!(value.to_string(), "{ a: 1, 'b c': ['x', null] }");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(7_i128).to_string(), "7n");
        assert_eq!(Value::Object(Object::new()).to_string(), "{}");
    }
}
