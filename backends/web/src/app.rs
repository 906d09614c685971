use kelp_core::Node;

use crate::{dom::DomRoot, error::WebError, renderer::WebRenderer};

/// Builder for [`WebApp`].
#[derive(Debug, Default, Clone)]
pub struct WebAppBuilder {
    root_id: Option<String>,
}

impl WebAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { root_id: None }
    }

    /// Sets the DOM element identifier that should host the application.
    #[must_use]
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }

    /// Finalises the builder and creates a [`WebApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM root element cannot be found or initialized.
    pub fn build(self) -> Result<WebApp, WebError> {
        WebApp::new_with_options(self)
    }
}

/// Entry point for rendering kelp trees inside the browser.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebApp {
    renderer: WebRenderer,
}

impl WebApp {
    fn new_with_options(builder: WebAppBuilder) -> Result<Self, WebError> {
        console_error_panic_hook::set_once();
        let dom_root = DomRoot::new(builder.root_id.as_deref())?;
        Ok(Self {
            renderer: WebRenderer::new(dom_root),
        })
    }

    /// Provides access to the renderer.
    #[must_use]
    pub const fn renderer(&self) -> &WebRenderer {
        &self.renderer
    }

    /// Provides mutable access to the renderer for advanced integrations.
    #[must_use]
    pub const fn renderer_mut(&mut self) -> &mut WebRenderer {
        &mut self.renderer
    }

    /// Renders a [`Node`] tree into the host element.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree is invalid or a DOM operation fails.
    pub fn render(&mut self, node: &Node) -> Result<(), WebError> {
        self.renderer.render(node)?;
        Ok(())
    }
}

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl WebApp {
    /// Convenience constructor exposed to JavaScript callers.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM root element cannot be found or initialized.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Self, WebError> {
        Self::new_with_options(WebAppBuilder::new())
    }

    /// Mounts the application, clearing the host element.
    ///
    /// # Errors
    ///
    /// Returns an error if DOM operations fail during mounting.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), WebError> {
        self.renderer.mount()
    }

    /// Renders a JSON-encoded node tree
    /// (`{"tag": ..., "props": ..., "children": ...}`) into the host element.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a valid tree or a DOM
    /// operation fails.
    #[wasm_bindgen]
    pub fn render_json(&mut self, tree: &str) -> Result<(), WebError> {
        let node: Node = serde_json::from_str(tree)?;
        self.render(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_stores_root_id() {
        let builder = WebAppBuilder::new().with_root_id("app");
        assert_eq!(format!("{builder:?}"), r#"WebAppBuilder { root_id: Some("app") }"#);
    }
}
