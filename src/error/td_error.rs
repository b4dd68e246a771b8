/// A type description that is not one of the recognized variants.
///
/// This is a programming error in the caller, not a data error: it is
/// raised while the description is built, before any suspect is examined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TdError {
    /// A primitive tag outside the closed set of kinds.
    #[error("malformed type description: unknown primitive kind '{0}'")]
    UnknownPrimitive(String),

    /// A JSON value with no type-description meaning.
    #[error("malformed type description at {path}: unsupported notation {found}")]
    UnsupportedNotation { path: String, found: String },

    /// The same property declared twice, e.g. as both `a` and `a?`.
    #[error("malformed type description at {path}: property '{name}' is declared twice")]
    DuplicateProperty { path: String, name: String },
}
