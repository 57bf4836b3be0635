//! Rich-text document wire model and translation helpers.
//!
//! Responsibilities:
//! - Define the wire model of a rich-text node tree
//! - Parse JSON text, JSON values or files into the wire model
//! - Translate the wire model into the domain [`Document`]
//!
//! Unlike entry fields, the node skeleton is typed: every node must be an object and
//! `content` must be an array. Mismatches are reported with the JSON path of the failing
//! node.

use crate::document::{Document, EntryPlacement, HeadingLevel, Mark, Node, TextRun};
use crate::fields::{asset_from_value, entry_from_value};
use crate::{ContentfulError, ContentfulResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Root `nodeType` of every rich-text field.
const DOCUMENT_NODE_TYPE: &str = "document";

// ============================================================================
// Public RichText operations
// ============================================================================

/// Rich-text document operations.
///
/// This is a zero-sized type used for namespacing parsing operations.
pub struct RichText;

impl RichText {
    /// Parse a rich-text document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ContentfulError`] if:
    /// - the text is not JSON or does not match the node skeleton,
    /// - the root node is not a `document`.
    pub fn parse(json_text: &str) -> ContentfulResult<Document> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        let wire = serde_path_to_error::deserialize::<_, NodeWire>(&mut deserializer)
            .map_err(skeleton_error)?;
        deserializer.end()?;
        wire_to_domain(wire)
    }

    /// Parse a rich-text document from an already-decoded JSON value.
    pub fn from_value(value: Value) -> ContentfulResult<Document> {
        let wire =
            serde_path_to_error::deserialize::<_, NodeWire>(value).map_err(skeleton_error)?;
        wire_to_domain(wire)
    }

    /// Read and parse a rich-text document from a JSON file.
    pub fn read_file(path: &Path) -> ContentfulResult<Document> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

fn skeleton_error(err: serde_path_to_error::Error<serde_json::Error>) -> ContentfulError {
    let path = err.path().to_string();
    let source = err.into_inner();
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path.as_str()
    };
    ContentfulError::Translation(format!("Rich text schema mismatch at {path}: {source}"))
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of any rich-text node, including the `document` root.
///
/// Unknown keys are accepted: the content store adds fields over time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeWire {
    #[serde(default)]
    node_type: Option<String>,
    #[serde(default)]
    data: Value,
    /// `null` reads as no children.
    #[serde(default)]
    content: Option<Vec<NodeWire>>,
    #[serde(default)]
    value: Value,
    /// `null` reads as no marks.
    #[serde(default)]
    marks: Option<Vec<Value>>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: NodeWire) -> ContentfulResult<Document> {
    match wire.node_type.as_deref() {
        Some(DOCUMENT_NODE_TYPE) => Ok(Document::new(nodes_from_wire(wire.content))),
        Some(other) => Err(ContentfulError::NotADocument(other.to_owned())),
        None => Err(ContentfulError::NotADocument(String::new())),
    }
}

fn nodes_from_wire(content: Option<Vec<NodeWire>>) -> Vec<Node> {
    content
        .unwrap_or_default()
        .into_iter()
        .map(node_from_wire)
        .collect()
}

fn node_from_wire(wire: NodeWire) -> Node {
    let target = wire.data.get("target");
    match wire.node_type.as_deref().unwrap_or_default() {
        "paragraph" => Node::Paragraph(nodes_from_wire(wire.content)),
        "heading-1" => Node::Heading {
            level: HeadingLevel::One,
            children: nodes_from_wire(wire.content),
        },
        "heading-2" => Node::Heading {
            level: HeadingLevel::Two,
            children: nodes_from_wire(wire.content),
        },
        "hyperlink" => Node::Hyperlink {
            uri: wire
                .data
                .get("uri")
                .and_then(Value::as_str)
                .filter(|uri| !uri.is_empty())
                .map(str::to_owned),
            children: nodes_from_wire(wire.content),
        },
        "embedded-asset-block" => Node::EmbeddedAsset(target.and_then(asset_from_value)),
        "embedded-entry-block" => Node::EmbeddedEntry {
            placement: EntryPlacement::Block,
            entry: target.and_then(entry_from_value),
        },
        "embedded-entry-inline" => Node::EmbeddedEntry {
            placement: EntryPlacement::Inline,
            entry: target.and_then(entry_from_value),
        },
        "text" => Node::Text(TextRun {
            value: wire.value.as_str().unwrap_or_default().to_owned(),
            marks: wire
                .marks
                .iter()
                .flatten()
                .filter_map(|mark| mark.get("type").and_then(Value::as_str))
                .filter_map(Mark::parse)
                .collect(),
        }),
        other => Node::Unknown(other.to_owned()),
    }
}
