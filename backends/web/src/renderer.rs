use crate::{dom::DomRoot, error::WebError};

use kelp_core::Node;

use web_sys::Element;

/// Internal state machine for the web renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WebRendererState {
    /// The renderer has been created but not touched the DOM yet.
    #[default]
    Initialising,
    /// The renderer has cleared its host and owns its content.
    Mounted,
}

/// Materializes [`Node`] trees into the DOM below a [`DomRoot`] host.
#[derive(Debug)]
pub struct WebRenderer {
    root: DomRoot,
    state: WebRendererState,
}

impl WebRenderer {
    /// Creates a new renderer instance bound to the provided DOM root.
    #[must_use]
    pub fn new(root: DomRoot) -> Self {
        Self {
            root,
            state: WebRendererState::Initialising,
        }
    }

    /// Returns the current renderer state.
    #[must_use]
    pub const fn state(&self) -> WebRendererState {
        self.state
    }

    /// Returns the DOM root the renderer is bound to.
    #[must_use]
    pub const fn root(&self) -> &DomRoot {
        &self.root
    }

    /// Mounts the renderer, clearing the host element.
    ///
    /// # Errors
    ///
    /// Returns an error if DOM operations fail during mounting.
    pub fn mount(&mut self) -> Result<(), WebError> {
        self.root.clear()?;
        self.state = WebRendererState::Mounted;
        log::debug!("web renderer mounted");
        Ok(())
    }

    /// Renders a node tree, replacing the host's previous content, and
    /// returns the created root element.
    ///
    /// The tree is validated before any DOM mutation, so an invalid tree
    /// leaves the previous content in place.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Invalid`] for a tree that fails validation, or
    /// a DOM failure wrapped as [`WebError::Js`].
    pub fn render(&mut self, node: &Node) -> Result<Element, WebError> {
        node.validate()?;
        let element = kelp_core::render_unchecked(&self.root, node)?;
        self.root.clear()?;
        self.root.element().append_child(&element)?;
        self.state = WebRendererState::Mounted;
        log::debug!("rendered <{}> tree into host", node.tag());
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(WebRendererState::default(), WebRendererState::Initialising);
    }
}
