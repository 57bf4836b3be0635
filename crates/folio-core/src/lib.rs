//! # Folio Core
//!
//! Rich-text document rendering for the Folio portfolio site.
//!
//! This crate turns a parsed content-store [`Document`](contentful::Document) into a tree of
//! output nodes ([`VNode`]) that can be mounted in a page layout or serialised to HTML:
//! - per-node dispatch over the closed set of rich-text node types
//! - per-content-type dispatch for embedded entries (module, article, video, image row,
//!   carousel)
//! - asset URL normalisation, newline handling and viewport-dependent layout
//!
//! **No I/O**: fetching documents belongs to the callers (`api-rest`, `folio-cli`). A render
//! pass never fails; problems with the content are reported as [`Diagnostic`]s.

pub mod components;
pub mod config;
pub mod constants;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod html;
pub mod layout;
pub mod render;
pub mod text;
pub mod url;
pub mod vnode;

pub use components::carousel::{CarouselRenderer, Slide, SlideKind, StaticCarousel};
pub use components::video_card::VideoCardState;
pub use config::CoreConfig;
pub use context::{video_instance_key, ColorMode, RenderContext, RenderMode, VideoActivations};
pub use diagnostics::Diagnostic;
pub use error::{FolioError, FolioResult};
pub use layout::{layout, LayoutConstants, PlayerKind, ViewportClass};
pub use render::{DocumentRenderer, Rendered};
pub use vnode::{Element, VNode};
