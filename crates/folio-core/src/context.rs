//! Per-render context supplied by the page that embeds the renderer.
//!
//! Theme and colour mode are explicit values here rather than process-wide state, so one
//! document can be rendered in several contexts (light and dark, page and teaser) side by side.

use crate::components::video_card::VideoCardState;
use crate::layout::ViewportClass;
use crate::{FolioError, FolioResult};
use folio_types::CssColor;
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Full article body.
    #[default]
    Page,
    /// Truncated summary of an article.
    Teaser,
}

impl FromStr for RenderMode {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" => Ok(RenderMode::Page),
            "teaser" => Ok(RenderMode::Teaser),
            other => Err(FolioError::InvalidInput(format!(
                "unknown render mode '{other}' (expected 'page' or 'teaser')"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Modifier class applied to cards.
    pub fn card_class(self) -> &'static str {
        match self {
            ColorMode::Light => "card--light",
            ColorMode::Dark => "card--dark",
        }
    }
}

impl FromStr for ColorMode {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(FolioError::InvalidInput(format!(
                "unknown color mode '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

/// Key addressing one embedded video card within a document.
///
/// The same entry can be embedded more than once, and an entry may have no id, so a card is
/// addressed by its entry id plus its occurrence among cards with that id, in document order:
/// `v1#0`, `v1#1`, and `#0` for the first card without an id.
pub fn video_instance_key(entry_id: Option<&str>, occurrence: usize) -> String {
    format!("{}#{occurrence}", entry_id.unwrap_or_default())
}

/// Activation state of every video card, keyed by [`video_instance_key`].
///
/// Activation is one-way: there is no operation that returns a card to
/// [`VideoCardState::Idle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoActivations {
    activated: HashSet<String>,
}

impl VideoActivations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user activation of the video card with `instance_key`.
    ///
    /// Returns `true` if the card was idle before this call.
    pub fn activate(&mut self, instance_key: impl Into<String>) -> bool {
        self.activated.insert(instance_key.into())
    }

    pub fn state(&self, instance_key: &str) -> VideoCardState {
        if self.activated.contains(instance_key) {
            VideoCardState::Idle.activate()
        } else {
            VideoCardState::Idle
        }
    }

    pub fn len(&self) -> usize {
        self.activated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activated.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for VideoActivations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut activations = Self::new();
        for id in iter {
            activations.activate(id);
        }
        activations
    }
}

/// Everything a render pass needs from its caller besides the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub accent_color: Option<CssColor>,
    pub mode: RenderMode,
    pub viewport: ViewportClass,
    pub color_mode: ColorMode,
    pub activations: VideoActivations,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accent_color(mut self, accent_color: CssColor) -> Self {
        self.accent_color = Some(accent_color);
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportClass) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_activations(mut self, activations: VideoActivations) -> Self {
        self.activations = activations;
        self
    }
}
