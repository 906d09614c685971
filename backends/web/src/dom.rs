use crate::error::WebError;

use kelp_core::DomBackend;

use web_sys::{Document, Element, Text, Window};

/// Mounting point for rendered trees: a document plus one host element.
///
/// `DomRoot` also implements [`DomBackend`], so it is both the place trees
/// are attached and the environment that creates their elements.
#[derive(Debug, Clone)]
pub struct DomRoot {
    document: Document,
    element: Element,
}

impl DomRoot {
    /// Creates a [`DomRoot`] pointing at the provided element id, or at a
    /// fresh `div` appended to `<body>` when no id is given.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside a browser, or
    /// [`WebError::RootNotFound`] when the id does not resolve.
    pub fn new(root_id: Option<&str>) -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;

        let element = if let Some(id) = root_id {
            document
                .get_element_by_id(id)
                .ok_or_else(|| WebError::RootNotFound(id.to_string()))?
        } else {
            let body = document.body().ok_or(WebError::DomUnavailable)?;
            let host = document.create_element("div")?;
            host.set_id("kelp-root");
            body.append_child(&host)?;
            host
        };

        Ok(Self { document, element })
    }

    /// Returns the DOM element representing the mounting point.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Clears the mounting element.
    ///
    /// # Errors
    ///
    /// Returns an error if a child cannot be detached.
    pub fn clear(&self) -> Result<(), WebError> {
        while let Some(child) = self.element.first_child() {
            self.element.remove_child(&child)?;
        }
        Ok(())
    }
}

impl DomBackend for DomRoot {
    type Element = Element;
    type Text = Text;
    type Error = WebError;

    fn create_element(&self, tag: &str) -> Result<Element, WebError> {
        self.document.create_element(tag).map_err(WebError::from)
    }

    fn set_attribute(&self, element: &mut Element, name: &str, value: &str) -> Result<(), WebError> {
        element.set_attribute(name, value).map_err(WebError::from)
    }

    fn create_text_node(&self, content: &str) -> Text {
        self.document.create_text_node(content)
    }

    fn append_element(&self, parent: &mut Element, child: Element) -> Result<(), WebError> {
        parent.append_child(&child).map_err(WebError::from)?;
        Ok(())
    }

    fn append_text(&self, parent: &mut Element, child: Text) -> Result<(), WebError> {
        parent.append_child(&child).map_err(WebError::from)?;
        Ok(())
    }
}
