//! HTML escaping for text and attribute positions.

use std::borrow::Cow;

/// Escapes `&`, `<` and `>` for text content.
#[must_use]
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

/// Escapes `&`, `<`, `>`, `"` and `'` for attribute values.
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(value: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escaping = value
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\'')));
    if !needs_escaping {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
