//! HTML serialisation of rendered output.

use crate::vnode::{Element, VNode};
use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "source"];

/// Serialise a sequence of output nodes to an HTML string.
pub fn to_html(nodes: &[VNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &VNode) {
    match node {
        VNode::Text(text) => out.push_str(&escape_html(text)),
        VNode::Fragment(children) => children.iter().for_each(|c| write_node(out, c)),
        VNode::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        // Empty values are boolean attributes (`controls`, `playsinline`).
        if value.is_empty() {
            let _ = write!(out, " {name}");
        } else {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.tag);
}

/// Escape text for use in HTML content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
