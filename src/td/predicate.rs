//! Predicate type descriptions.
//!
//! A [`Predicate`] is the most general matcher: an arbitrary decision
//! function over the suspect. It sees only the value, never the path, so a
//! failing predicate is always reported at the site where it appears.

use std::fmt::{self, Debug, Display};
use std::sync::{Arc, LazyLock};

use crate::td::TypeDescription;
use crate::value::Value;

/// Type alias for the decision function stored in a predicate.
pub(crate) type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A user-supplied type guard.
///
/// The function must be pure: the matcher may call it any number of times,
/// from any thread. Predicates compare by identity, so a clone equals its
/// original while two separately built predicates never do.
///
/// # Example
///
/// ```rust
/// use conforms::{conforms, Predicate, Value};
///
/// let even = Predicate::named("even", |v: &Value| {
///     v.as_f64().is_some_and(|n| n % 2.0 == 0.0)
/// });
///
/// assert!(conforms(&Value::from(4), &even.clone().into()));
/// assert!(!conforms(&Value::from(5), &even.into()));
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: Option<Arc<str>>,
    test: PredicateFn,
}

impl Predicate {
    /// Creates an anonymous predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            test: Arc::new(test),
        }
    }

    /// Creates a predicate with a name shown in diagnostics.
    pub fn named<F>(name: &str, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(Arc::from(name)),
            test: Arc::new(test),
        }
    }

    /// Returns the predicate's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Runs the decision function against `suspect`.
    pub fn test(&self, suspect: &Value) -> bool {
        (self.test)(suspect)
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.test), Arc::as_ptr(&other.test))
    }
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name().unwrap_or("predicate"))
    }
}

static IS_POSITIVE_INTEGER: LazyLock<Predicate> = LazyLock::new(|| {
    Predicate::named("isPositiveInteger", |suspect| match suspect {
        Value::Number(n) => n.is_finite() && n.fract() == 0.0 && *n > 0.0,
        _ => false,
    })
});

/// Matches numbers that are integers strictly greater than zero.
///
/// Every call returns the same shared predicate, so the result compares equal
/// to the `expected_td` of a mismatch it produced.
pub fn is_positive_integer() -> TypeDescription {
    TypeDescription::Predicate(IS_POSITIVE_INTEGER.clone())
}
