//! Text-run rendering.
//!
//! Literal newlines do not break lines in HTML, so each `\n` in a text run becomes an explicit
//! `<br>` element between the surrounding segments.

use crate::vnode::{Element, VNode};
use contentful::{Mark, TextRun};

pub const LINE_BREAK_TAG: &str = "br";

/// Replace newlines inside text nodes with line-break elements.
///
/// Non-text nodes pass through untouched and empty segments produce no text node, so running
/// this over its own output changes nothing.
pub fn split_lines(nodes: Vec<VNode>) -> Vec<VNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            VNode::Text(text) if text.contains('\n') => {
                for (i, segment) in text.split('\n').enumerate() {
                    if i > 0 {
                        out.push(Element::new(LINE_BREAK_TAG).into());
                    }
                    let segment = segment.strip_suffix('\r').unwrap_or(segment);
                    if !segment.is_empty() {
                        out.push(VNode::text(segment));
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn mark_tag(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "strong",
        Mark::Italic => "em",
        Mark::Underline => "u",
        Mark::Code => "code",
        Mark::Superscript => "sup",
        Mark::Subscript => "sub",
    }
}

/// Render a text run: split lines, then wrap in one element per mark (first mark innermost).
pub fn render_text_run(run: &TextRun) -> VNode {
    let segments = split_lines(vec![VNode::text(run.value.as_str())]);
    let mut node = match segments.len() {
        1 => segments.into_iter().next().unwrap_or_else(VNode::empty),
        _ => VNode::Fragment(segments),
    };
    if node.is_empty() {
        return VNode::empty();
    }
    for mark in &run.marks {
        node = Element::new(mark_tag(*mark)).child(node).into();
    }
    node
}
