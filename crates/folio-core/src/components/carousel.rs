//! Carousel hand-off.
//!
//! The renderer only prepares slides (normalised URLs, media kind, labels). Turning them into
//! an interactive slider is the job of a [`CarouselRenderer`]; [`StaticCarousel`] is the
//! default, which emits plain markup for a page script to enhance.

use super::asset::{classify, video_element, AssetClass};
use super::media_fallback;
use crate::constants::MEDIA_FALLBACK_MESSAGE;
use crate::context::RenderContext;
use crate::diagnostics::Diagnostic;
use crate::render::RenderPass;
use crate::url::asset_src;
use crate::vnode::{Element, VNode};
use contentful::CarouselEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Video,
}

/// One carousel item, ready to emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub src: String,
    pub content_type: Option<String>,
    pub alt: Option<String>,
}

/// Collaborator that renders a carousel from prepared slides.
pub trait CarouselRenderer: Send + Sync {
    fn render(&self, slides: &[Slide], ctx: &RenderContext) -> VNode;
}

/// Non-interactive carousel markup.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCarousel;

impl CarouselRenderer for StaticCarousel {
    fn render(&self, slides: &[Slide], ctx: &RenderContext) -> VNode {
        let items = slides.iter().enumerate().map(|(index, slide)| {
            let media = match slide.kind {
                SlideKind::Image => Element::new("img")
                    .attr("src", slide.src.as_str())
                    .attr("alt", slide.alt.as_deref().unwrap_or(""))
                    .attr("loading", "lazy"),
                SlideKind::Video => {
                    video_element(&slide.src, slide.content_type.as_deref(), "carousel-video")
                }
            };
            VNode::from(
                Element::new("figure")
                    .class("carousel-slide")
                    .attr("data-index", index.to_string())
                    .child(media),
            )
        });

        Element::new("div")
            .class("carousel")
            .class(ctx.color_mode.card_class())
            .attr("role", "region")
            .attr("aria-roledescription", "carousel")
            .attr("data-slide-count", slides.len().to_string())
            .children(items)
            .into()
    }
}

pub(crate) fn render(
    pass: &mut RenderPass<'_>,
    entry_id: Option<&str>,
    carousel: &CarouselEntry,
) -> VNode {
    let mut slides = Vec::with_capacity(carousel.media.len());
    for (index, asset) in carousel.media.iter().enumerate() {
        let kind = match classify(asset.content_type.as_deref()) {
            AssetClass::Video => SlideKind::Video,
            // Untyped media is most likely an image.
            AssetClass::Image | AssetClass::Other => SlideKind::Image,
        };
        match asset_src(asset) {
            Some(src) => slides.push(Slide {
                kind,
                src,
                content_type: asset.content_type.clone(),
                alt: asset.title.as_ref().map(|t| t.as_str().to_owned()),
            }),
            None => pass.diagnostics.record(Diagnostic::MissingMedia {
                entry_id: entry_id.map(str::to_owned),
                field: format!("media[{index}]"),
            }),
        }
    }

    if slides.is_empty() {
        pass.diagnostics.record(Diagnostic::MissingMedia {
            entry_id: entry_id.map(str::to_owned),
            field: "media".into(),
        });
        return media_fallback(MEDIA_FALLBACK_MESSAGE);
    }

    pass.carousel.render(&slides, pass.ctx)
}
