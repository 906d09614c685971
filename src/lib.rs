#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use kelp_core::{
    AttrValue, Child, DomBackend, MAX_DEPTH, Node, RenderError, ValidateError, html_document,
    render, render_unchecked,
};

pub use kelp_core::escape;
pub use kelp_core::tags;

pub mod prelude {
    //! The commonly used surface in one import: the node types, the render
    //! entry points, and every tag constructor.
    //!
    //! ```
    //! use kelp::prelude::*;
    //!
    //! let node = div().class("card").child(p().text("hello"));
    //! assert_eq!(node.to_html(), "<div class='card'><p>hello</p></div>");
    //! ```

    pub use kelp_core::tags::*;
    pub use kelp_core::{AttrValue, Child, Node, html_document, render, render_unchecked};
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_json_payload_to_markup() {
        let json = r#"{
            "tag": "ul",
            "props": {"class": "menu", "hidden": false},
            "children": [
                {"tag": "li", "children": ["a"]},
                {"tag": "li", "props": {"selected": true}, "children": ["b"]}
            ]
        }"#;
        let node: Node = serde_json::from_str(json).expect("valid tree");
        assert_eq!(
            node.to_html(),
            "<ul class='menu' hidden='false'><li>a</li><li selected>b</li></ul>"
        );
    }
}
