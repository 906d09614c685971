//! Web/WASM backend for kelp.
//!
//! This crate renders [`kelp_core::Node`] trees into live browser elements.
//! [`DomRoot`] resolves the host element and implements the element-creation
//! primitives over `web-sys`; [`WebRenderer`] drives the tree walk; and
//! [`WebApp`] is the high-level entry point, also exposed to JavaScript
//! through `wasm-bindgen` with a JSON tree payload:
//!
//! ```js
//! const app = new WebApp();
//! app.render_json('{"tag": "p", "children": ["hello"]}');
//! ```
//!
//! Everything compiles on non-wasm targets, but constructing a [`DomRoot`]
//! requires a browser environment at runtime.

mod app;
mod dom;
mod error;
mod renderer;

pub use app::{WebApp, WebAppBuilder};
pub use dom::DomRoot;
pub use error::WebError;
pub use renderer::{WebRenderer, WebRendererState};
