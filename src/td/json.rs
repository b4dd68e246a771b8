//! JSON notation for type descriptions.
//!
//! Type descriptions are often written as data: a string names a primitive
//! kind, an array is an array-shape and an object is an object-shape. A key
//! ending in `?` declares an optional property. Sets and predicates have no
//! JSON notation and are built in code.

use serde_json::Value as Json;
use tracing::debug;

use crate::error::TdError;
use crate::path::PathArray;
use crate::td::{optional, Property, Shape, TypeDescription};

impl TypeDescription {
    /// Parses a type description from JSON notation.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::UnknownPrimitive`] for a string that is not a
    /// primitive tag, [`TdError::UnsupportedNotation`] for numbers, booleans
    /// and `null`, and [`TdError::DuplicateProperty`] when an object declares
    /// a property both as `name` and `name?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conforms::{conforms, TypeDescription, Value};
    /// use serde_json::json;
    ///
    /// let td = TypeDescription::from_json(&json!({
    ///     "prop": "string",
    ///     "obj": { "pair": ["number", "number"] },
    ///     "tags?": ["string"]
    /// }))
    /// .unwrap();
    ///
    /// let suspect = Value::from(json!({"prop": "x", "obj": {"pair": [1, 2]}}));
    /// assert!(conforms(&suspect, &td));
    /// ```
    pub fn from_json(json: &Json) -> Result<Self, TdError> {
        parse(json, &PathArray::root()).inspect_err(|err| debug!(%err, "rejected type description"))
    }
}

impl TryFrom<&Json> for TypeDescription {
    type Error = TdError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        TypeDescription::from_json(json)
    }
}

impl TryFrom<Json> for TypeDescription {
    type Error = TdError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        TypeDescription::from_json(&json)
    }
}

fn parse(json: &Json, path: &PathArray) -> Result<TypeDescription, TdError> {
    match json {
        Json::String(name) => Ok(TypeDescription::Primitive(name.parse()?)),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse(item, &path.push_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(TypeDescription::Array),
        Json::Object(map) => {
            let mut shape = Shape::with_capacity(map.len());
            for (key, value) in map {
                let (name, property) = match key.strip_suffix('?') {
                    Some(name) => (name, optional(parse(value, &path.push_key(name))?)),
                    None => (key.as_str(), Property::required(parse(value, &path.push_key(key))?)),
                };
                // `a` and `a?` name the same property
                if shape.contains_key(name) {
                    return Err(TdError::DuplicateProperty {
                        path: path.path_string(),
                        name: name.to_string(),
                    });
                }
                shape.insert(name.to_string(), property);
            }
            Ok(TypeDescription::Object(shape))
        }
        Json::Null | Json::Bool(_) | Json::Number(_) => Err(TdError::UnsupportedNotation {
            path: path.path_string(),
            found: json.to_string(),
        }),
    }
}
