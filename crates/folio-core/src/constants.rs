//! Constants used throughout the Folio core crate.
//!
//! Layout numbers live here rather than in the components so that `layout()` stays the single
//! place that decides which one applies to a viewport.

/// Number of top-level text blocks shown in teaser mode when nothing is configured.
pub const DEFAULT_TEASER_BLOCK_LIMIT: usize = 2;

/// `chrono` format used for article publish dates ("March 4, 2021").
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Viewports narrower than this are classified as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Horizontal space subtracted from every image-row column.
pub const IMAGE_ROW_GUTTER_PX: u32 = 8;

pub const MOBILE_IMAGE_ROW_HEIGHT_PX: u32 = 180;
pub const DESKTOP_IMAGE_ROW_HEIGHT_PX: u32 = 320;

pub const MOBILE_CARD_IMAGE_WIDTH_PERCENT: u32 = 100;
pub const DESKTOP_CARD_IMAGE_WIDTH_PERCENT: u32 = 40;

/// Inline fallback shown where a video should be.
pub const VIDEO_FALLBACK_MESSAGE: &str = "Video unavailable";

/// Inline fallback shown where an image should be.
pub const IMAGE_FALLBACK_MESSAGE: &str = "Image unavailable";

/// Inline fallback shown where a group of media (image row, carousel) should be.
pub const MEDIA_FALLBACK_MESSAGE: &str = "Media unavailable";
