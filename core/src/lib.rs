//! Core crate of the kelp HTML toolkit.
//!
//! A [`Node`] describes one element as plain data: a tag name, an
//! insertion-ordered attribute map, and an ordered child list where each
//! entry is either literal text or another node. Trees built here can be
//! serialized to markup strings, round-tripped through JSON (feature
//! `serde`), or materialized into live elements through any [`DomBackend`].
//!
//! ```
//! use kelp_core::tags::{input, li, ul};
//!
//! let menu = ul()
//!     .class("menu")
//!     .children([li().text("home"), li().text("about")]);
//! assert_eq!(menu.to_html(), "<ul class='menu'><li>home</li><li>about</li></ul>");
//!
//! let field = input().attr("disabled", true).attr("type", "text");
//! assert_eq!(field.to_html(), "<input disabled type='text'/>");
//! ```
//!
//! Boolean attribute values follow the flag-attribute convention only for
//! `true`: a `false` value renders as the literal string `false` rather
//! than being omitted, in both the markup serializer and the DOM renderer.

pub mod dom;
pub mod error;
pub mod escape;
mod html;
mod node;
pub mod tags;

pub use dom::{DomBackend, RenderError, render, render_unchecked};
pub use error::ValidateError;
pub use html::html_document;
pub use node::{AttrValue, Child, MAX_DEPTH, Node};
