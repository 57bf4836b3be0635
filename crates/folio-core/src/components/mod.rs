//! Handlers for embedded assets and entries.
//!
//! One module per entry kind. Each handler reads only optional fields and turns every absent
//! value into either a missing element or an inline fallback, never into an error.

pub mod article_card;
pub mod asset;
pub mod carousel;
pub mod image_row;
pub mod module_card;
pub mod video_card;

use crate::render::RenderPass;
use crate::url::asset_src;
use crate::vnode::{Element, VNode};
use contentful::Asset;
use folio_types::NonEmptyText;

/// Outer element shared by all cards: kind class, colour-mode class and accent style.
pub(crate) fn card_shell(pass: &RenderPass<'_>, tag: &'static str, kind: &str) -> Element {
    let card = Element::new(tag)
        .class("card")
        .class(kind)
        .class(pass.ctx.color_mode.card_class());
    match pass.accent() {
        Some(accent) => card.attr(
            "style",
            format!("--accent: {accent}; border-color: {accent}"),
        ),
        None => card,
    }
}

/// Inline textual stand-in for media that could not be resolved.
pub(crate) fn media_fallback(message: &str) -> VNode {
    Element::new("p")
        .class("media-fallback")
        .attr("role", "note")
        .child(VNode::text(message))
        .into()
}

/// `<img>` for an asset, or `None` when the asset or its URL is absent.
pub(crate) fn image(asset: Option<&Asset>, class: &str) -> Option<Element> {
    let asset = asset?;
    let src = asset_src(asset)?;
    Some(
        Element::new("img")
            .class(class)
            .attr("src", src)
            .attr(
                "alt",
                asset.title.as_ref().map(NonEmptyText::as_str).unwrap_or(""),
            )
            .attr("loading", "lazy"),
    )
}

/// Card cover image sized for the current viewport.
pub(crate) fn card_image(pass: &RenderPass<'_>, asset: Option<&Asset>) -> Option<VNode> {
    image(asset, "card-image").map(|img| {
        img.attr(
            "style",
            format!("width: {}%", pass.layout.card_image_width_percent),
        )
        .into()
    })
}

/// Text element for an optional field.
pub(crate) fn text_element(
    tag: &'static str,
    class: &str,
    text: Option<&NonEmptyText>,
) -> Option<VNode> {
    text.map(|t| {
        Element::new(tag)
            .class(class)
            .child(VNode::text(t.as_str()))
            .into()
    })
}
