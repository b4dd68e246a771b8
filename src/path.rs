//! Path representation for locating a mismatch inside a nested suspect.
//!
//! This module provides [`PathArray`] and [`PathSegment`]. A path is rendered
//! as an accessor expression rooted at `root`, e.g. `root.users[0]['first name']`.

use std::fmt::{self, Display};
use std::sync::LazyLock;

use regex::Regex;

// Identifier start: letters, letter numbers, `$`, `_`. Continue also allows
// marks, digits and connector punctuation.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}$_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}$]*$")
        .expect("identifier regex")
});

/// A segment of a path.
///
/// Indices are stored as `f64` so that any numeric key (including `NaN` and
/// the infinities) can be rendered. Paths produced by the matcher only ever
/// hold non-negative integral indices.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// A property access (e.g., `user`, `'first name'`)
    Key(String),
    /// A numeric index access (e.g., `[0]`, `[-45]`)
    Index(f64),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx as f64)
    }

    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) if is_identifier(name) => write!(f, ".{}", name),
            PathSegment::Key(name) => write!(f, "[{}]", quote(name)),
            PathSegment::Index(idx) => write!(f, "[{}]", format_number(*idx)),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::index(idx)
    }
}

impl From<f64> for PathSegment {
    fn from(idx: f64) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<i32> for PathSegment {
    fn from(idx: i32) -> Self {
        PathSegment::Index(f64::from(idx))
    }
}

/// Ordered route of keys and indices from the root suspect to a location.
///
/// Building methods return a new path and leave the receiver untouched, so a
/// parent path can be shared by every sibling branch of a traversal.
///
/// # Example
///
/// ```rust
/// use conforms::PathArray;
///
/// let path = PathArray::root()
///     .push_key("users")
///     .push_index(0)
///     .push_key("first name");
///
/// assert_eq!(path.path_string(), "root.users[0]['first name']");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathArray {
    segments: Vec<PathSegment>,
}

impl PathArray {
    /// Creates an empty path representing the root suspect.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path with `prefix` in front of every segment of `self`.
    pub fn prefixed(&self, prefix: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(prefix);
        segments.extend_from_slice(&self.segments);
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path as an accessor expression rooted at `root`.
    ///
    /// Keys that are valid bare identifiers use dot form, other keys are
    /// quoted in brackets, and indices are bracketed without quotes.
    pub fn path_string(&self) -> String {
        self.to_string()
    }
}

impl Display for PathArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for segment in &self.segments {
            segment.write_to(f)?;
        }
        Ok(())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for PathArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<PathSegment>> for PathArray {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

/// Returns true if `name` can follow a `.` in an accessor expression.
pub(crate) fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Quotes `name` as a single-quoted string literal.
pub(crate) fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('\'');
    for c in name.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Formats a number the way a dynamic language prints it: integral values
/// have no fractional part, the special values use their symbolic names and
/// magnitudes from `1e21` up or below `1e-6` use exponent form (`1e+21`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let sci = format!("{:e}", n);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        }
    } else {
        format!("{}", n)
    }
}
