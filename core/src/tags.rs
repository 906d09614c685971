//! Tag constructors and the void-element set.
//!
//! One zero-argument constructor per standard HTML tag, each returning a
//! bare [`Node`] ready for the builder methods:
//!
//! ```
//! use kelp_core::tags::{button, div};
//!
//! let node = div().child(button().text("Go").attr("disabled", true));
//! assert_eq!(node.tag(), "div");
//! ```

use crate::node::Node;

/// HTML elements that never carry children and self-close when serialized.
pub const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns `true` if `tag` names an HTML void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Defines one constructor function per tag name.
macro_rules! tags {
    ($($name:ident)*) => {
        $(
            #[doc = concat!("Creates a `<", stringify!($name), ">` element.")]
            #[must_use]
            pub fn $name() -> Node {
                Node::new(stringify!($name))
            }
        )*
    };
}

tags! {
    a abbr address area article aside audio
    b base bdi bdo blockquote body br button
    canvas caption cite code col colgroup
    data datalist dd del details dfn dialog div dl dt
    em embed
    fieldset figcaption figure footer form
    h1 h2 h3 h4 h5 h6 head header hr html
    i iframe img input ins
    kbd
    label legend li link
    main map mark menu meta meter
    nav noscript
    object ol optgroup option output
    p param picture pre progress
    q
    rp rt ruby
    s samp script section select slot small source span strong style sub summary sup
    table tbody td template textarea tfoot th thead time title tr track
    u ul
    var video
    wbr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_use_their_tag() {
        assert_eq!(div().tag(), "div");
        assert_eq!(h1().tag(), "h1");
        assert_eq!(textarea().tag(), "textarea");
    }

    #[test]
    fn test_void_set() {
        assert!(is_void("br"));
        assert!(is_void("input"));
        assert!(!is_void("div"));
        assert!(!is_void("template"));
        assert!(img().is_void());
    }
}
