//! The node descriptor tree and its builder API.
//!
//! A [`Node`] describes one element: a tag name, an insertion-ordered
//! attribute map, and an ordered child list. Trees are plain owned data;
//! building one performs no I/O and touches no rendering environment.

use crate::error::ValidateError;
use crate::tags::is_void;

use indexmap::IndexMap;

/// Maximum nesting depth accepted by [`Node::validate`].
///
/// Children are owned values, so a tree can never contain itself; the bound
/// exists to keep recursion finite on adversarially deep input.
pub const MAX_DEPTH: usize = 256;

/// An attribute value: either a plain string or a boolean.
///
/// `Bool(true)` renders as a bare flag attribute (`disabled`). `Bool(false)`
/// renders as the literal value `"false"` — it is not omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// A plain string value.
    Str(String),
    /// A boolean value.
    Bool(bool),
}

impl AttrValue {
    /// The text this value renders as in attribute position.
    #[must_use]
    pub fn as_attr_text(&self) -> &str {
        match self {
            Self::Str(value) => value,
            Self::Bool(true) => "",
            Self::Bool(false) => "false",
        }
    }

    /// Returns `true` for `Bool(true)`, the bare-flag encoding.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! attr_value_from_display {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Str(value.to_string())
                }
            }
        )*
    };
}

attr_value_from_display!(i32 i64 u32 u64 usize f64);

/// One entry of a child list: literal text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Child {
    /// Literal text, escaped on serialization.
    Text(String),
    /// A nested element, rendered recursively.
    Node(Node),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A single element descriptor: tag, attributes, children.
///
/// Constructed through [`Node::new`] or the constructors in [`crate::tags`],
/// then extended with the consuming builder methods.
///
/// ```
/// use kelp_core::tags::{li, ul};
///
/// let menu = ul()
///     .class("menu")
///     .children([li().text("home"), li().text("about")]);
/// assert_eq!(menu.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    tag: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "IndexMap::is_empty")
    )]
    props: IndexMap<String, AttrValue>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    children: Vec<Child>,
}

impl Node {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attribute map, in insertion order.
    #[must_use]
    pub const fn props(&self) -> &IndexMap<String, AttrValue> {
        &self.props
    }

    /// The child list, in sequence order.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns `true` if the tag is an HTML void element.
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void(&self.tag)
    }

    /// Sets an attribute. A repeated name overwrites the value but keeps the
    /// position of the first insertion.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Sets the `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value.into())
    }

    /// Sets the `class` attribute from individual tokens, trimming each and
    /// skipping empty entries.
    #[must_use]
    pub fn class_list<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref().trim();
                (!token.is_empty()).then(|| token.to_owned())
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.attr("class", joined)
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value.into())
    }

    /// Sets the `name` attribute.
    #[must_use]
    pub fn name(self, value: impl Into<String>) -> Self {
        self.attr("name", value.into())
    }

    /// Sets a `data-*` attribute. Camel-case keys are kebab-cased, so
    /// `data("userId", "7")` produces `data-user-id='7'`.
    #[must_use]
    pub fn data(self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attr(format!("data-{}", to_kebab(key)), value)
    }

    /// Sets the `style` attribute from property/value pairs. Camel-case
    /// property names are kebab-cased.
    #[must_use]
    pub fn style<'a, I>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let joined = properties
            .into_iter()
            .map(|(property, value)| format!("{}: {value}", to_kebab(property)))
            .collect::<Vec<_>>()
            .join("; ");
        self.attr("style", joined)
    }

    /// Appends one child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child of an iterator, preserving order.
    #[must_use]
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Child::Text(text.into()))
    }

    /// Checks the whole tree and reports the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidateError`] for an empty or malformed tag name, a
    /// malformed attribute name, a void element carrying children, or
    /// nesting deeper than [`MAX_DEPTH`].
    pub fn validate(&self) -> Result<(), ValidateError> {
        self.validate_at(0)
    }

    fn validate_at(&self, depth: usize) -> Result<(), ValidateError> {
        if depth >= MAX_DEPTH {
            return Err(ValidateError::TooDeep(MAX_DEPTH));
        }
        if self.tag.is_empty() {
            return Err(ValidateError::EmptyTag);
        }
        if !is_valid_tag_name(&self.tag) {
            return Err(ValidateError::BadTagName(self.tag.clone()));
        }
        for name in self.props.keys() {
            if !is_valid_attr_name(name) {
                return Err(ValidateError::BadAttrName(name.clone()));
            }
        }
        if self.is_void() && !self.children.is_empty() {
            return Err(ValidateError::VoidWithChildren(self.tag.clone()));
        }
        for child in &self.children {
            if let Child::Node(node) = child {
                node.validate_at(depth + 1)?;
            }
        }
        Ok(())
    }

    /// Repairs the tree in place instead of rejecting it: children of void
    /// elements are dropped, with a warning per fix.
    pub fn sanitize(&mut self) {
        if self.is_void() && !self.children.is_empty() {
            log::warn!(
                "dropping {} child node(s) of void element <{}>",
                self.children.len(),
                self.tag
            );
            self.children.clear();
        }
        for child in &mut self.children {
            if let Child::Node(node) = child {
                node.sanitize();
            }
        }
    }
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

/// Converts `camelCase` and `snake_case` names to `kebab-case`. Acronym
/// runs break before their last capital, so `HTMLThing` becomes
/// `html-thing`.
fn to_kebab(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push('-');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase()
                    && chars.get(i + 1).is_some_and(char::is_ascii_lowercase));
            if boundary && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
