//! Error types for tree validation.

use core::fmt;

/// Error type returned when a node tree fails validation.
///
/// Validation runs over the whole tree before anything is materialized, so
/// a failing tree never produces a partially attached element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// A descriptor has an empty tag name.
    EmptyTag,
    /// A tag name contains characters element creation would reject.
    BadTagName(String),
    /// An attribute name contains whitespace, quotes, `=`, `/`, `<` or `>`.
    BadAttrName(String),
    /// A void element carries children.
    VoidWithChildren(String),
    /// The tree nests deeper than the allowed bound.
    TooDeep(usize),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "tag name is empty"),
            Self::BadTagName(tag) => write!(f, "invalid tag name `{tag}`"),
            Self::BadAttrName(name) => write!(f, "invalid attribute name `{name}`"),
            Self::VoidWithChildren(tag) => {
                write!(f, "void element <{tag}> cannot have children")
            }
            Self::TooDeep(limit) => {
                write!(f, "tree nests deeper than the {limit}-level bound")
            }
        }
    }
}

impl std::error::Error for ValidateError {}
