//! Viewport-dependent layout constants.
//!
//! The viewport is classified by the caller and passed in; [`layout`] is a pure function of
//! that classification and is evaluated once per render pass.

use crate::constants::{
    DESKTOP_CARD_IMAGE_WIDTH_PERCENT, DESKTOP_IMAGE_ROW_HEIGHT_PX, IMAGE_ROW_GUTTER_PX,
    MOBILE_BREAKPOINT_PX, MOBILE_CARD_IMAGE_WIDTH_PERCENT, MOBILE_IMAGE_ROW_HEIGHT_PX,
};
use crate::{FolioError, FolioResult};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels.
    pub fn from_width(width_px: u32) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

impl FromStr for ViewportClass {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "narrow" => Ok(ViewportClass::Mobile),
            "desktop" | "wide" => Ok(ViewportClass::Desktop),
            other => Err(FolioError::InvalidInput(format!(
                "unknown viewport '{other}' (expected 'mobile' or 'desktop')"
            ))),
        }
    }
}

/// Which video player an activated video card mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Platform player with native controls.
    Native,
    /// Custom-control player mounted by the page script.
    Enhanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConstants {
    pub image_row_height_px: u32,
    pub image_row_gutter_px: u32,
    pub video_player: PlayerKind,
    pub card_image_width_percent: u32,
}

pub fn layout(viewport: ViewportClass) -> LayoutConstants {
    match viewport {
        ViewportClass::Mobile => LayoutConstants {
            image_row_height_px: MOBILE_IMAGE_ROW_HEIGHT_PX,
            image_row_gutter_px: IMAGE_ROW_GUTTER_PX,
            video_player: PlayerKind::Native,
            card_image_width_percent: MOBILE_CARD_IMAGE_WIDTH_PERCENT,
        },
        ViewportClass::Desktop => LayoutConstants {
            image_row_height_px: DESKTOP_IMAGE_ROW_HEIGHT_PX,
            image_row_gutter_px: IMAGE_ROW_GUTTER_PX,
            video_player: PlayerKind::Enhanced,
            card_image_width_percent: DESKTOP_CARD_IMAGE_WIDTH_PERCENT,
        },
    }
}

/// Width of one column in a strip of equal columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnWidth {
    pub percent: f64,
    pub gutter_px: u32,
}

impl ColumnWidth {
    /// Equal share of 100% for `columns` columns. Zero columns is treated as one.
    pub fn equal_share(columns: usize, gutter_px: u32) -> Self {
        Self {
            percent: 100.0 / columns.max(1) as f64,
            gutter_px,
        }
    }

    /// CSS `calc()` expression, e.g. `calc(33.3333% - 8px)`.
    pub fn css(&self) -> String {
        format!(
            "calc({}% - {}px)",
            format_percent(self.percent),
            self.gutter_px
        )
    }
}

/// Four decimal places with trailing zeros removed (`50`, `33.3333`).
fn format_percent(value: f64) -> String {
    let formatted = format!("{value:.4}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
