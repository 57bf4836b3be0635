//! Domain-level rich-text document model.
//!
//! These types are independent of the wire format. Every field that the content store may
//! omit is an `Option` (or an empty `Vec`), so consumers are forced to decide what an absent
//! value looks like.

use chrono::NaiveDate;
use folio_types::{NonEmptyText, Slug};

/// A parsed rich-text field: an ordered sequence of top-level nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One unit in a document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Paragraph(Vec<Node>),
    Heading {
        level: HeadingLevel,
        children: Vec<Node>,
    },
    Hyperlink {
        uri: Option<String>,
        children: Vec<Node>,
    },
    /// `embedded-asset-block`. `None` when the link target was not resolved.
    EmbeddedAsset(Option<Asset>),
    EmbeddedEntry {
        placement: EntryPlacement,
        entry: Option<EmbeddedEntry>,
    },
    Text(TextRun),
    /// Any `nodeType` outside the supported set, kept verbatim for diagnostics.
    Unknown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    One,
    Two,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
        }
    }
}

/// Whether an embedded entry sits in block flow or inside a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPlacement {
    Block,
    Inline,
}

/// A run of plain text with optional formatting marks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRun {
    pub value: String,
    pub marks: Vec<Mark>,
}

impl TextRun {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Superscript,
    Subscript,
}

impl Mark {
    /// Parse a wire mark name. Unknown marks return `None` and are dropped.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Mark::Bold),
            "italic" => Some(Mark::Italic),
            "underline" => Some(Mark::Underline),
            "code" => Some(Mark::Code),
            "superscript" => Some(Mark::Superscript),
            "subscript" => Some(Mark::Subscript),
            _ => None,
        }
    }
}

/// A binary asset (image or video) referenced from a document or an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Asset {
    pub id: Option<String>,
    pub title: Option<NonEmptyText>,
    /// `file.url` exactly as stored; may be protocol-relative.
    pub url: Option<String>,
    /// `file.contentType` (MIME).
    pub content_type: Option<String>,
}

/// A content-store entry embedded in a document.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedEntry {
    pub id: Option<String>,
    pub content: EntryContent,
}

/// Closed set of entry kinds the renderer knows about.
///
/// `Unknown` carries the content-type tag as received (or `None` when there was no tag and
/// nothing else identified the entry).
#[derive(Clone, Debug, PartialEq)]
pub enum EntryContent {
    Module(ModuleEntry),
    Article(ArticleEntry),
    Video(VideoEntry),
    ImageRow(ImageRowEntry),
    Carousel(CarouselEntry),
    Unknown(Option<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleEntry {
    pub title: Option<NonEmptyText>,
    pub subtitle: Option<NonEmptyText>,
    pub image: Option<Asset>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleEntry {
    pub title: Option<NonEmptyText>,
    pub slug: Option<Slug>,
    pub description: Option<NonEmptyText>,
    pub excerpt: Option<NonEmptyText>,
    pub publish_date: Option<NaiveDate>,
    pub cover_image: Option<Asset>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoEntry {
    pub title: Option<NonEmptyText>,
    pub thumbnail: Option<Asset>,
    pub video: Option<Asset>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageRowEntry {
    pub images: Vec<Asset>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselEntry {
    pub media: Vec<Asset>,
}
