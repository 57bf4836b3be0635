//! Non-fatal observations recorded during a render pass.
//!
//! Content authors add entry kinds and leave fields empty; none of that may break a page.
//! Each problem is logged when it is recorded and returned to the caller alongside the output.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A node type outside the supported set.
    UnknownNodeType { node_type: String },
    /// An embedded entry whose content type has no handler.
    UnknownContentType {
        entry_id: Option<String>,
        content_type: Option<String>,
    },
    /// An embedded link whose target was not resolved by the content store.
    UnresolvedTarget { node_type: &'static str },
    /// An embedded asset that is neither an image nor a video.
    UnsupportedAsset {
        asset_id: Option<String>,
        content_type: Option<String>,
    },
    /// Required media (a video file, a row image, ...) has no usable URL.
    MissingMedia {
        entry_id: Option<String>,
        field: String,
    },
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownNodeType { node_type } => {
                write!(f, "unknown node type '{node_type}'")
            }
            Diagnostic::UnknownContentType {
                entry_id,
                content_type,
            } => write!(
                f,
                "unknown content type '{}' for entry {}",
                or_dash(content_type),
                or_dash(entry_id)
            ),
            Diagnostic::UnresolvedTarget { node_type } => {
                write!(f, "unresolved link target in {node_type}")
            }
            Diagnostic::UnsupportedAsset {
                asset_id,
                content_type,
            } => write!(
                f,
                "unsupported asset type '{}' for asset {}",
                or_dash(content_type),
                or_dash(asset_id)
            ),
            Diagnostic::MissingMedia { entry_id, field } => {
                write!(f, "missing media '{field}' for entry {}", or_dash(entry_id))
            }
        }
    }
}

/// Diagnostics collected during one render pass.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "render diagnostic");
        self.0.push(diagnostic);
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
