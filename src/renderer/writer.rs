//! Fixed-format XML serialization
//!
//! The formatting is a byte-for-byte external contract that some consumers
//! diff against: an XML declaration line, no indentation at depth 0, two
//! spaces per nesting level below that, every line newline-terminated, and
//! childless elements self-closed. None of it is configurable.

use crate::renderer::tree::Element;

/// Serialize `root` as a complete XML document string
pub fn write_document(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\" ?>\n");
    write_element(root, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    if element.children().is_empty() {
        out.push_str("/>\n");
    } else {
        out.push_str(">\n");
        for child in element.children() {
            write_element(child, depth + 1, out);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(element.name());
        out.push_str(">\n");
    }
}

/// Escape special characters in attribute values
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('>', "&gt;")
}
