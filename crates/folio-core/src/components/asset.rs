//! `embedded-asset-block` handler.

use super::{image, media_fallback};
use crate::constants::{IMAGE_FALLBACK_MESSAGE, VIDEO_FALLBACK_MESSAGE};
use crate::diagnostics::Diagnostic;
use crate::render::RenderPass;
use crate::url::asset_src;
use crate::vnode::{Element, VNode};
use contentful::Asset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetClass {
    Image,
    Video,
    Other,
}

/// Classify an asset by the top-level type of its MIME string.
pub fn classify(content_type: Option<&str>) -> AssetClass {
    let Some(mime) = content_type else {
        return AssetClass::Other;
    };
    let top_level = mime
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match top_level.as_str() {
        "image" => AssetClass::Image,
        "video" => AssetClass::Video,
        _ => AssetClass::Other,
    }
}

/// `<video>` element for a playable source.
pub(crate) fn video_element(src: &str, mime: Option<&str>, class: &str) -> Element {
    let source = Element::new("source")
        .attr("src", src)
        .attr_opt("type", mime);
    Element::new("video")
        .class(class)
        .attr("src", src)
        .attr("controls", "")
        .attr("playsinline", "")
        .attr("preload", "metadata")
        .child(source)
}

fn missing_file(pass: &mut RenderPass<'_>, asset: &Asset, message: &str) -> VNode {
    pass.diagnostics.record(Diagnostic::MissingMedia {
        entry_id: asset.id.clone(),
        field: "file.url".into(),
    });
    media_fallback(message)
}

pub(crate) fn render(pass: &mut RenderPass<'_>, asset: Option<&Asset>) -> VNode {
    let Some(asset) = asset else {
        pass.diagnostics.record(Diagnostic::UnresolvedTarget {
            node_type: "embedded-asset-block",
        });
        return VNode::empty();
    };

    match classify(asset.content_type.as_deref()) {
        AssetClass::Video => match asset_src(asset) {
            Some(src) => {
                video_element(&src, asset.content_type.as_deref(), "embedded-video").into()
            }
            None => missing_file(pass, asset, VIDEO_FALLBACK_MESSAGE),
        },
        AssetClass::Image => match image(Some(asset), "embedded-image") {
            Some(img) => img.into(),
            None => missing_file(pass, asset, IMAGE_FALLBACK_MESSAGE),
        },
        AssetClass::Other => {
            pass.diagnostics.record(Diagnostic::UnsupportedAsset {
                asset_id: asset.id.clone(),
                content_type: asset.content_type.clone(),
            });
            VNode::empty()
        }
    }
}
