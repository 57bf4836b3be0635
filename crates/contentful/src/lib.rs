//! Content store wire/boundary support.
//!
//! This crate translates the content store's rich-text JSON (a `document` node tree with
//! linked entries and assets already resolved) into the domain [`Document`] consumed by the
//! renderer in `folio-core`.
//!
//! This crate focuses on:
//! - the wire model of rich-text nodes
//! - lenient extraction of embedded entry and asset fields
//! - translation between wire structs and domain types
//!
//! Only the document skeleton can fail to parse. Entry fields that are missing or have an
//! unexpected type are treated as absent, because the content model is edited by authors
//! outside this workspace's control.

pub mod document;
mod fields;
pub mod rich_text;

pub use document::{
    ArticleEntry, Asset, CarouselEntry, Document, EmbeddedEntry, EntryContent, EntryPlacement,
    HeadingLevel, ImageRowEntry, Mark, ModuleEntry, Node, TextRun, VideoEntry,
};
pub use rich_text::RichText;

/// Errors returned by the `contentful` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum ContentfulError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected a 'document' root node, found '{0}'")]
    NotADocument(String),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`ContentfulError`].
pub type ContentfulResult<T> = Result<T, ContentfulError>;
