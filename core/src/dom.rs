//! Materializing node trees through a DOM backend.
//!
//! The walk is depth-first and pre-order: create the element, set its
//! attributes in map order, then append each child in sequence order,
//! recursing into element children. Backends supply the element-creation
//! primitives; `kelp-web` implements them over the browser DOM, and any
//! in-memory document model can stand in for tests.

use core::fmt;

use crate::error::ValidateError;
use crate::node::{Child, Node};

/// The element-creation primitives of an ambient rendering environment.
///
/// The append operation is split per node kind because the two handles are
/// distinct associated types with no common supertype.
pub trait DomBackend {
    /// Live element handle.
    type Element;
    /// Live text-node handle.
    type Text;
    /// Backend failure type.
    type Error;

    /// Creates an empty element with the given tag.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure for tags its environment rejects.
    fn create_element(&self, tag: &str) -> Result<Self::Element, Self::Error>;

    /// Sets one attribute on an element.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure for names its environment rejects.
    fn set_attribute(
        &self,
        element: &mut Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Creates a detached text node.
    fn create_text_node(&self, content: &str) -> Self::Text;

    /// Appends an element child, transferring ownership to the parent.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure if the append is rejected.
    fn append_element(
        &self,
        parent: &mut Self::Element,
        child: Self::Element,
    ) -> Result<(), Self::Error>;

    /// Appends a text child, transferring ownership to the parent.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure if the append is rejected.
    fn append_text(
        &self,
        parent: &mut Self::Element,
        child: Self::Text,
    ) -> Result<(), Self::Error>;
}

/// Error produced when rendering a tree through a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError<E> {
    /// The tree failed validation; no element was created.
    Invalid(ValidateError),
    /// The backend reported a failure; the partially built subtree is
    /// discarded and never returned.
    Backend(E),
}

impl<E: fmt::Display> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid tree: {err}"),
            Self::Backend(err) => write!(f, "backend error: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for RenderError<E> {}

impl<E> From<ValidateError> for RenderError<E> {
    fn from(err: ValidateError) -> Self {
        Self::Invalid(err)
    }
}

/// Renders a node tree into one live element.
///
/// The whole tree is validated first, so an invalid tree fails before the
/// backend sees a single call. The returned element's attribute set and
/// child sequence mirror the input exactly, modulo the boolean-attribute
/// encoding: `true` becomes a flag attribute with an empty value and
/// `false` becomes the literal value `"false"`.
///
/// # Errors
///
/// Returns [`RenderError::Invalid`] for a tree [`Node::validate`] rejects,
/// or [`RenderError::Backend`] as soon as any primitive fails.
pub fn render<B: DomBackend>(
    backend: &B,
    node: &Node,
) -> Result<B::Element, RenderError<B::Error>> {
    node.validate()?;
    render_node(backend, node)
}

/// Renders without validating first.
///
/// This keeps the permissive behavior of feeding the backend whatever the
/// tree contains; malformed input surfaces as whatever the environment's
/// primitives raise. Prefer [`render`] unless the tree is already known to
/// be valid.
///
/// # Errors
///
/// Returns [`RenderError::Backend`] as soon as any primitive fails.
pub fn render_unchecked<B: DomBackend>(
    backend: &B,
    node: &Node,
) -> Result<B::Element, RenderError<B::Error>> {
    render_node(backend, node)
}

fn render_node<B: DomBackend>(
    backend: &B,
    node: &Node,
) -> Result<B::Element, RenderError<B::Error>> {
    let mut element = backend
        .create_element(node.tag())
        .map_err(RenderError::Backend)?;

    for (name, value) in node.props() {
        backend
            .set_attribute(&mut element, name, value.as_attr_text())
            .map_err(RenderError::Backend)?;
    }

    for child in node.children() {
        match child {
            Child::Text(text) => {
                let text_node = backend.create_text_node(text);
                backend
                    .append_text(&mut element, text_node)
                    .map_err(RenderError::Backend)?;
            }
            Child::Node(child_node) => {
                let child_element = render_node(backend, child_node)?;
                backend
                    .append_element(&mut element, child_element)
                    .map_err(RenderError::Backend)?;
            }
        }
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::MAX_DEPTH;
    use crate::tags::{div, input, li, p, ul};
    use core::convert::Infallible;

    #[derive(Debug, PartialEq, Eq)]
    enum MockChild {
        Element(MockElement),
        Text(String),
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MockElement {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<MockChild>,
    }

    struct MockDom;

    impl DomBackend for MockDom {
        type Element = MockElement;
        type Text = String;
        type Error = Infallible;

        fn create_element(&self, tag: &str) -> Result<MockElement, Infallible> {
            Ok(MockElement {
                tag: tag.to_owned(),
                attrs: Vec::new(),
                children: Vec::new(),
            })
        }

        fn set_attribute(
            &self,
            element: &mut MockElement,
            name: &str,
            value: &str,
        ) -> Result<(), Infallible> {
            element.attrs.push((name.to_owned(), value.to_owned()));
            Ok(())
        }

        fn create_text_node(&self, content: &str) -> String {
            content.to_owned()
        }

        fn append_element(
            &self,
            parent: &mut MockElement,
            child: MockElement,
        ) -> Result<(), Infallible> {
            parent.children.push(MockChild::Element(child));
            Ok(())
        }

        fn append_text(&self, parent: &mut MockElement, child: String) -> Result<(), Infallible> {
            parent.children.push(MockChild::Text(child));
            Ok(())
        }
    }

    /// A backend that refuses to create one specific tag.
    struct RejectingDom {
        rejected: &'static str,
    }

    impl DomBackend for RejectingDom {
        type Element = MockElement;
        type Text = String;
        type Error = String;

        fn create_element(&self, tag: &str) -> Result<MockElement, String> {
            if tag == self.rejected {
                return Err(format!("cannot create <{tag}>"));
            }
            Ok(MockElement {
                tag: tag.to_owned(),
                attrs: Vec::new(),
                children: Vec::new(),
            })
        }

        fn set_attribute(
            &self,
            element: &mut MockElement,
            name: &str,
            value: &str,
        ) -> Result<(), String> {
            element.attrs.push((name.to_owned(), value.to_owned()));
            Ok(())
        }

        fn create_text_node(&self, content: &str) -> String {
            content.to_owned()
        }

        fn append_element(
            &self,
            parent: &mut MockElement,
            child: MockElement,
        ) -> Result<(), String> {
            parent.children.push(MockChild::Element(child));
            Ok(())
        }

        fn append_text(&self, parent: &mut MockElement, child: String) -> Result<(), String> {
            parent.children.push(MockChild::Text(child));
            Ok(())
        }
    }

    #[test]
    fn test_bare_element() {
        let element = render(&MockDom, &div()).unwrap();
        assert_eq!(element.tag, "div");
        assert!(element.attrs.is_empty());
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_flag_and_string_attrs() {
        let node = input().attr("disabled", true).attr("type", "text");
        let element = render(&MockDom, &node).unwrap();
        assert_eq!(
            element.attrs,
            [
                ("disabled".to_owned(), String::new()),
                ("type".to_owned(), "text".to_owned()),
            ]
        );
    }

    #[test]
    fn test_false_sets_literal_value() {
        let node = div().attr("hidden", false);
        let element = render(&MockDom, &node).unwrap();
        assert_eq!(element.attrs, [("hidden".to_owned(), "false".to_owned())]);
    }

    #[test]
    fn test_text_child_becomes_text_node() {
        let node = p().text("hello");
        let element = render(&MockDom, &node).unwrap();
        assert_eq!(element.children, [MockChild::Text("hello".to_owned())]);
    }

    #[test]
    fn test_nested_elements_in_order() {
        let node = ul().children([li().text("a"), li().text("b")]);
        let element = render(&MockDom, &node).unwrap();
        assert_eq!(element.tag, "ul");
        let tags_and_text: Vec<(&str, &MockChild)> = element
            .children
            .iter()
            .map(|child| match child {
                MockChild::Element(el) => (el.tag.as_str(), &el.children[0]),
                MockChild::Text(_) => panic!("expected element children"),
            })
            .collect();
        assert_eq!(tags_and_text[0].0, "li");
        assert_eq!(*tags_and_text[0].1, MockChild::Text("a".to_owned()));
        assert_eq!(tags_and_text[1].0, "li");
        assert_eq!(*tags_and_text[1].1, MockChild::Text("b".to_owned()));
    }

    #[test]
    fn test_mixed_children_keep_positions() {
        let node = div().text("before").child(p().text("x")).text("after");
        let element = render(&MockDom, &node).unwrap();
        assert!(matches!(&element.children[0], MockChild::Text(t) if t == "before"));
        assert!(matches!(&element.children[1], MockChild::Element(el) if el.tag == "p"));
        assert!(matches!(&element.children[2], MockChild::Text(t) if t == "after"));
    }

    #[test]
    fn test_attr_map_order_is_preserved() {
        let node = div().attr("b", "2").attr("a", "1").attr("c", true);
        let element = render(&MockDom, &node).unwrap();
        let names: Vec<&str> = element.attrs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_rendering_twice_yields_equal_trees() {
        let node = ul().children([li().text("a"), li().attr("selected", true)]);
        let first = render(&MockDom, &node).unwrap();
        let second = render(&MockDom, &node).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_tree_fails_without_backend_calls() {
        let node = div().child(Node::new(""));
        assert_eq!(
            render(&MockDom, &node),
            Err(RenderError::Invalid(ValidateError::EmptyTag))
        );
    }

    #[test]
    fn test_void_with_children_is_rejected() {
        let node = input().text("stray");
        assert_eq!(
            render(&MockDom, &node),
            Err(RenderError::Invalid(ValidateError::VoidWithChildren(
                "input".to_owned()
            )))
        );
    }

    #[test]
    fn test_depth_bound_is_enforced() {
        let deep = (0..MAX_DEPTH).fold(div(), |acc, _| div().child(acc));
        assert!(matches!(
            render(&MockDom, &deep),
            Err(RenderError::Invalid(ValidateError::TooDeep(_)))
        ));
    }

    #[test]
    fn test_unchecked_skips_validation() {
        let node = input().text("stray");
        let element = render_unchecked(&MockDom, &node).unwrap();
        assert_eq!(element.children, [MockChild::Text("stray".to_owned())]);
    }

    #[test]
    fn test_backend_failure_aborts_the_call() {
        let backend = RejectingDom { rejected: "li" };
        let node = ul().children([li().text("a")]);
        assert_eq!(
            render(&backend, &node),
            Err(RenderError::Backend("cannot create <li>".to_owned()))
        );
    }

    #[test]
    fn test_render_error_display() {
        let err: RenderError<String> = RenderError::Invalid(ValidateError::EmptyTag);
        assert_eq!(err.to_string(), "invalid tree: tag name is empty");
        let err = RenderError::Backend("boom".to_owned());
        assert_eq!(err.to_string(), "backend error: boom");
    }
}
