//! Click-to-play video card.
//!
//! A card starts [`VideoCardState::Idle`], showing its thumbnail with a centred play button.
//! A user activation moves it to [`VideoCardState::Activated`], which replaces the thumbnail
//! with a player. There is no transition back.
//!
//! Activation is tracked per embedded instance (see [`crate::context::video_instance_key`]),
//! so two embeds of the same entry play independently.

use super::asset::video_element;
use super::{card_shell, image, media_fallback, text_element};
use crate::constants::VIDEO_FALLBACK_MESSAGE;
use crate::diagnostics::Diagnostic;
use crate::layout::PlayerKind;
use crate::render::RenderPass;
use crate::url::asset_src;
use crate::vnode::{Element, VNode};
use contentful::VideoEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoCardState {
    #[default]
    Idle,
    Activated,
}

impl VideoCardState {
    /// The only transition. Activating an already active card is a no-op.
    pub fn activate(self) -> Self {
        VideoCardState::Activated
    }

    pub fn is_activated(self) -> bool {
        self == VideoCardState::Activated
    }
}

fn thumbnail(instance_key: &str, video: &VideoEntry) -> Element {
    let picture = match image(video.thumbnail.as_ref(), "video-thumbnail-image") {
        Some(img) => VNode::from(img),
        None => Element::new("div")
            .class("video-thumbnail-placeholder")
            .into(),
    };
    let label = match &video.title {
        Some(title) => format!("Play video: {title}"),
        None => "Play video".to_owned(),
    };

    Element::new("button")
        .class("video-thumbnail")
        .attr("type", "button")
        .attr("aria-label", label)
        .attr("data-activate-video", instance_key)
        .child(picture)
        .child(
            Element::new("span")
                .class("play-button")
                .attr("aria-hidden", "true")
                .child(VNode::text("\u{25B6}")),
        )
}

fn player(kind: PlayerKind, src: &str, mime: Option<&str>) -> Element {
    match kind {
        PlayerKind::Native => video_element(src, mime, "video-player")
            .class("video-player--native")
            .attr("autoplay", ""),
        PlayerKind::Enhanced => Element::new("div")
            .class("video-player")
            .class("video-player--enhanced")
            .attr("data-player", "enhanced")
            .attr("data-src", src)
            .attr_opt("data-type", mime)
            .child(
                Element::new("video")
                    .attr("src", src)
                    .attr("autoplay", "")
                    .attr("playsinline", ""),
            ),
    }
}

pub(crate) fn render(
    pass: &mut RenderPass<'_>,
    entry_id: Option<&str>,
    video: &VideoEntry,
) -> VNode {
    let instance_key = pass.next_video_key(entry_id);
    let card = card_shell(pass, "figure", "video-card")
        .attr_opt("data-entry-id", entry_id)
        .attr("data-video-instance", instance_key.as_str())
        .children(text_element("h3", "card-title", video.title.as_ref()));

    let source = video.video.as_ref().and_then(|asset| {
        asset_src(asset).map(|src| (src, asset.content_type.as_deref()))
    });
    let Some((src, mime)) = source else {
        pass.diagnostics.record(Diagnostic::MissingMedia {
            entry_id: entry_id.map(str::to_owned),
            field: "video".into(),
        });
        return card.child(media_fallback(VIDEO_FALLBACK_MESSAGE)).into();
    };

    let media = match pass.ctx.activations.state(&instance_key) {
        VideoCardState::Idle => thumbnail(&instance_key, video),
        VideoCardState::Activated => player(pass.layout.video_player, &src, mime),
    };
    card.child(media).into()
}
