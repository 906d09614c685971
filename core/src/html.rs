//! HTML string serialization.
//!
//! Attributes render single-quoted; flag attributes (`Bool(true)`) render as
//! the bare name; `Bool(false)` renders as the literal value `false`, the
//! same policy the DOM renderer applies. Void elements self-close and never
//! emit children.

use core::fmt::{self, Write};

use crate::escape::{escape_attr, escape_text};
use crate::node::{Child, Node};

impl Node {
    /// Streams the element's markup into a [`fmt::Write`] sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error; writing to a `String` never fails.
    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.tag())?;
        for (name, value) in self.props() {
            if value.is_flag() {
                write!(out, " {name}")?;
            } else {
                write!(out, " {name}='{}'", escape_attr(value.as_attr_text()))?;
            }
        }
        if self.is_void() {
            return out.write_str("/>");
        }
        out.write_char('>')?;
        for child in self.children() {
            match child {
                Child::Text(text) => out.write_str(&escape_text(text))?,
                Child::Node(node) => node.write_html(out)?,
            }
        }
        write!(out, "</{}>", self.tag())
    }

    /// Renders the element to a markup string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out)
            .expect("writing to a String never fails");
        out
    }

    /// Renders the element to an indented markup string, two spaces per
    /// nesting level, one child per line.
    #[must_use]
    pub fn to_html_pretty(&self) -> String {
        let mut out = String::new();
        self.write_html_pretty(&mut out, 0)
            .expect("writing to a String never fails");
        out
    }

    fn write_html_pretty<W: Write>(&self, out: &mut W, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        write!(out, "{pad}<{}", self.tag())?;
        for (name, value) in self.props() {
            if value.is_flag() {
                write!(out, " {name}")?;
            } else {
                write!(out, " {name}='{}'", escape_attr(value.as_attr_text()))?;
            }
        }
        if self.is_void() {
            return out.write_str(" />");
        }
        if self.children().is_empty() {
            return write!(out, "></{}>", self.tag());
        }
        out.write_char('>')?;
        for child in self.children() {
            out.write_char('\n')?;
            match child {
                Child::Text(text) => {
                    write!(out, "{pad}  {}", escape_text(text))?;
                }
                Child::Node(node) => node.write_html_pretty(out, indent + 1)?,
            }
        }
        write!(out, "\n{pad}</{}>", self.tag())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

/// Renders a full document: the doctype preamble followed by `root`.
#[must_use]
pub fn html_document(root: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>");
    root.write_html(&mut out)
        .expect("writing to a String never fails");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{body, br, button, div, html, img, li, span, ul};

    #[test]
    fn test_plain_element() {
        assert_eq!(div().to_html(), "<div></div>");
    }

    #[test]
    fn test_attrs_render_single_quoted_in_order() {
        let node = div().class("wrapper").id("root");
        assert_eq!(node.to_html(), "<div class='wrapper' id='root'></div>");
    }

    #[test]
    fn test_flag_attr_renders_bare() {
        let node = button().text("Go").attr("type", "submit").attr("disabled", true);
        assert_eq!(
            node.to_html(),
            "<button type='submit' disabled>Go</button>"
        );
    }

    #[test]
    fn test_false_attr_renders_literal_value() {
        let node = div().attr("hidden", false);
        assert_eq!(node.to_html(), "<div hidden='false'></div>");
    }

    #[test]
    fn test_void_element_self_closes() {
        assert_eq!(img().attr("src", "/logo.png").to_html(), "<img src='/logo.png'/>");
        assert_eq!(br().to_html(), "<br/>");
    }

    #[test]
    fn test_text_children_are_escaped() {
        let node = span().text("a < b & c");
        assert_eq!(node.to_html(), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_attr_values_are_escaped() {
        let node = div().attr("title", "it's \"quoted\"");
        assert_eq!(
            node.to_html(),
            "<div title='it&#x27;s &quot;quoted&quot;'></div>"
        );
    }

    #[test]
    fn test_nested_children_in_order() {
        let node = ul().children([li().text("a"), li().text("b")]);
        assert_eq!(node.to_html(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_display_matches_to_html() {
        let node = div().class("x").text("y");
        assert_eq!(node.to_string(), node.to_html());
    }

    #[test]
    fn test_pretty_output() {
        let node = div()
            .class("wrapper")
            .child(span().text("inner"))
            .text("tail");
        assert_eq!(
            node.to_html_pretty(),
            "<div class='wrapper'>\n  <span>\n    inner\n  </span>\n  tail\n</div>"
        );
    }

    #[test]
    fn test_pretty_void_element() {
        assert_eq!(img().attr("alt", "logo").to_html_pretty(), "<img alt='logo' />");
    }

    #[test]
    fn test_html_document_prepends_doctype() {
        let page = html().child(body().text("hi"));
        assert_eq!(
            html_document(&page),
            "<!DOCTYPE html><html><body>hi</body></html>"
        );
    }
}
