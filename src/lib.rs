//! # Conforms
//!
//! Structural matching of dynamically typed values against declarative type
//! descriptions, with a precise report of where and why a match failed.
//!
//! ## Overview
//!
//! Untyped data (API payloads, configs, parsed JSON) is checked against a
//! [`TypeDescription`]: primitive kind tags, object-shapes, arrays in three
//! arities, alternation-sets and predicates. Matching is duck-typed by
//! default, so properties the description does not mention are ignored; the
//! `exact` operations reject them instead. The suspect is never transformed.
//!
//! ## Core Types
//!
//! - [`Value`]: the dynamically typed suspect
//! - [`TypeDescription`]: the shape a suspect must have
//! - [`Matcher`]: the depth-first, first-failure matching algorithm
//! - [`MismatchInfo`]: the failing site (actual value, expected description, path)
//! - [`PathArray`]: route to a value, rendered like `root.users[0]['first name']`
//!
//! ## Example
//!
//! ```rust
//! use conforms::{conforms, mismatch, TypeDescription, Value};
//! use serde_json::json;
//!
//! let td = TypeDescription::from_json(&json!({
//!     "foo": { "bar": { "twenty two": [{ "prop": "string" }] } }
//! }))
//! .unwrap();
//!
//! let suspect = Value::from(json!({
//!     "foo": { "bar": { "twenty two": [{ "prop": "str" }, { "prop": -23 }] } }
//! }));
//!
//! assert!(!conforms(&suspect, &td));
//! let info = mismatch(&suspect, &td).unwrap();
//! assert_eq!(info.path_string(), "root.foo.bar['twenty two'][1].prop");
//! assert_eq!(info.actual_value(), &Value::from(-23));
//! ```

pub mod batch;
pub mod conform;
pub mod error;
pub mod matcher;
pub mod path;
pub mod td;
pub mod value;

pub use batch::validate_all;
pub use conform::{
    conforms, default_if_not_conforms, duck_mismatch, exact_mismatch, exactly_conforms, mismatch,
    validate,
};
pub use error::{MismatchInfo, Mismatches, TdError};
pub use matcher::{MatchMode, Matcher};
pub use path::{PathArray, PathSegment};
pub use td::{
    is_positive_integer, optional, td_set, Predicate, PrimitiveKind, Property, Shape,
    TypeDescription,
};
pub use value::{Function, Object, Symbol, Value};

/// Type alias for the outcome of checking a single suspect.
pub type ConformResult<'a> = stillwater::Validation<&'a Value, MismatchInfo>;
