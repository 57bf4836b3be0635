//! Document rendering.
//!
//! [`DocumentRenderer::render`] walks a document and dispatches each node to its handler.
//! The dispatch is an exhaustive match over the domain node and entry types, so a new variant
//! in `contentful` fails to compile here until it has a handler. Values the content store
//! sends that the domain model does not know arrive as `Unknown` and render nothing.

use crate::components::carousel::{CarouselRenderer, StaticCarousel};
use crate::components::{article_card, asset, carousel, image_row, module_card, video_card};
use crate::config::CoreConfig;
use crate::context::{video_instance_key, RenderContext, RenderMode};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::html::to_html;
use crate::layout::{layout, LayoutConstants};
use crate::text::render_text_run;
use crate::vnode::{Element, VNode};
use contentful::{Document, EmbeddedEntry, EntryContent, EntryPlacement, Node};
use folio_types::CssColor;
use std::collections::HashMap;

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// One output node per top-level document node, in order.
    pub nodes: Vec<VNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Rendered {
    pub fn to_html(&self) -> String {
        to_html(&self.nodes)
    }
}

/// Renders documents. Holds no per-render state and can be shared across threads.
pub struct DocumentRenderer {
    config: CoreConfig,
    carousel: Box<dyn CarouselRenderer>,
}

impl DocumentRenderer {
    /// Creates a renderer that uses [`StaticCarousel`] for carousels.
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            carousel: Box::new(StaticCarousel),
        }
    }

    /// Replace the carousel collaborator.
    pub fn with_carousel(mut self, carousel: impl CarouselRenderer + 'static) -> Self {
        self.carousel = Box::new(carousel);
        self
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Render `document` in `ctx`. Never fails; content problems end up in
    /// [`Rendered::diagnostics`].
    pub fn render(&self, document: &Document, ctx: &RenderContext) -> Rendered {
        let mut pass = RenderPass {
            ctx,
            config: &self.config,
            layout: layout(ctx.viewport),
            diagnostics: Diagnostics::default(),
            carousel: self.carousel.as_ref(),
            video_occurrences: HashMap::new(),
        };

        let mut text_blocks = 0usize;
        let nodes = document
            .nodes
            .iter()
            .map(|node| {
                if pass.skipped_in_teaser(node, &mut text_blocks) {
                    VNode::empty()
                } else {
                    pass.node(node)
                }
            })
            .collect::<Vec<_>>();

        let diagnostics = pass.diagnostics.into_vec();
        tracing::debug!(
            nodes = nodes.len(),
            diagnostics = diagnostics.len(),
            mode = ?ctx.mode,
            viewport = ?ctx.viewport,
            "rendered document"
        );

        Rendered { nodes, diagnostics }
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

/// State of a single render pass, handed to the component handlers.
pub(crate) struct RenderPass<'a> {
    pub(crate) ctx: &'a RenderContext,
    pub(crate) config: &'a CoreConfig,
    pub(crate) layout: LayoutConstants,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) carousel: &'a dyn CarouselRenderer,
    video_occurrences: HashMap<String, usize>,
}

impl RenderPass<'_> {
    /// Accent colour from the context, falling back to the configured default.
    pub(crate) fn accent(&self) -> Option<&CssColor> {
        self.ctx
            .accent_color
            .as_ref()
            .or_else(|| self.config.default_accent())
    }

    /// Instance key for the next video card of `entry_id`, in document order.
    pub(crate) fn next_video_key(&mut self, entry_id: Option<&str>) -> String {
        let seen = self
            .video_occurrences
            .entry(entry_id.unwrap_or_default().to_owned())
            .or_default();
        let key = video_instance_key(entry_id, *seen);
        *seen += 1;
        key
    }

    /// In teaser mode only the first `teaser_block_limit` paragraphs and headings render, and
    /// embedded blocks never do.
    fn skipped_in_teaser(&self, node: &Node, text_blocks: &mut usize) -> bool {
        if self.ctx.mode != RenderMode::Teaser {
            return false;
        }
        match node {
            Node::Paragraph(_) | Node::Heading { .. } => {
                *text_blocks += 1;
                *text_blocks > self.config.teaser_block_limit()
            }
            Node::EmbeddedAsset(_) | Node::EmbeddedEntry { .. } => true,
            Node::Hyperlink { .. } | Node::Text(_) | Node::Unknown(_) => {
                *text_blocks >= self.config.teaser_block_limit()
            }
        }
    }

    fn nodes(&mut self, nodes: &[Node]) -> Vec<VNode> {
        nodes.iter().map(|node| self.node(node)).collect()
    }

    pub(crate) fn node(&mut self, node: &Node) -> VNode {
        match node {
            Node::Paragraph(children) => Element::new("p").children(self.nodes(children)).into(),
            Node::Heading { level, children } => Element::new(level.tag())
                .children(self.nodes(children))
                .into(),
            Node::Hyperlink { uri, children } => self.hyperlink(uri.as_deref(), children),
            Node::EmbeddedAsset(target) => asset::render(self, target.as_ref()),
            Node::EmbeddedEntry { placement, entry } => self.entry(*placement, entry.as_ref()),
            Node::Text(run) => render_text_run(run),
            Node::Unknown(node_type) => {
                self.diagnostics.record(Diagnostic::UnknownNodeType {
                    node_type: node_type.clone(),
                });
                VNode::empty()
            }
        }
    }

    fn hyperlink(&mut self, uri: Option<&str>, children: &[Node]) -> VNode {
        let label = self.nodes(children);
        let Some(uri) = uri else {
            return VNode::Fragment(label);
        };

        let link = Element::new("a").attr("href", uri);
        let link = if uri.starts_with("http://") || uri.starts_with("https://") {
            link.attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
        } else {
            link
        };
        link.children(label).into()
    }

    fn entry(&mut self, placement: EntryPlacement, entry: Option<&EmbeddedEntry>) -> VNode {
        let Some(entry) = entry else {
            self.diagnostics.record(Diagnostic::UnresolvedTarget {
                node_type: match placement {
                    EntryPlacement::Block => "embedded-entry-block",
                    EntryPlacement::Inline => "embedded-entry-inline",
                },
            });
            return VNode::empty();
        };

        let entry_id = entry.id.as_deref();
        let rendered = match &entry.content {
            EntryContent::Module(module) => module_card::render(self, module),
            EntryContent::Article(article) => article_card::render(self, article),
            EntryContent::Video(video) => video_card::render(self, entry_id, video),
            EntryContent::ImageRow(row) => image_row::render(self, entry_id, row),
            EntryContent::Carousel(media) => carousel::render(self, entry_id, media),
            EntryContent::Unknown(content_type) => {
                self.diagnostics.record(Diagnostic::UnknownContentType {
                    entry_id: entry.id.clone(),
                    content_type: content_type.clone(),
                });
                VNode::empty()
            }
        };

        match placement {
            EntryPlacement::Inline if !rendered.is_empty() => Element::new("span")
                .class("embedded-inline")
                .child(rendered)
                .into(),
            _ => rendered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ColorMode, VideoActivations};
    use crate::layout::ViewportClass;
    use contentful::RichText;
    use serde_json::{json, Value};

    fn doc(content: Value) -> Document {
        RichText::from_value(json!({ "nodeType": "document", "data": {}, "content": content }))
            .expect("valid document")
    }

    fn text(value: &str) -> Value {
        json!({ "nodeType": "text", "value": value, "marks": [], "data": {} })
    }

    fn paragraph(value: &str) -> Value {
        json!({ "nodeType": "paragraph", "data": {}, "content": [text(value)] })
    }

    fn entry_block(id: &str, content_type: Option<&str>, fields: Value) -> Value {
        let mut sys = json!({ "id": id });
        if let Some(ct) = content_type {
            sys["contentType"] = json!({ "sys": { "id": ct } });
        }
        json!({
            "nodeType": "embedded-entry-block",
            "data": { "target": { "sys": sys, "fields": fields } },
            "content": []
        })
    }

    fn asset(url: &str, mime: &str, title: &str) -> Value {
        json!({
            "sys": { "id": format!("asset-{title}") },
            "fields": { "title": title, "file": { "url": url, "contentType": mime } }
        })
    }

    fn video_entry() -> Value {
        entry_block(
            "vid-1",
            Some("video"),
            json!({
                "title": "Reel",
                "thumbnail": asset("//images.example.net/thumb.jpg", "image/jpeg", "thumb"),
                "video": asset("//videos.example.net/reel.mp4", "video/mp4", "reel")
            }),
        )
    }

    fn render(content: Value, ctx: &RenderContext) -> Rendered {
        DocumentRenderer::default().render(&doc(content), ctx)
    }

    #[test]
    fn one_output_node_per_top_level_node() {
        let out = render(
            json!([paragraph("a"), { "nodeType": "hr", "data": {} }, paragraph("b")]),
            &RenderContext::new(),
        );
        assert_eq!(out.nodes.len(), 3);
        assert!(out.nodes[1].is_empty());
        assert_eq!(out.to_html(), "<p>a</p><p>b</p>");
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::UnknownNodeType {
                node_type: "hr".into()
            }]
        );
    }

    #[test]
    fn newline_in_text_becomes_break() {
        let out = render(json!([paragraph("line one\nline two")]), &RenderContext::new());
        assert_eq!(out.to_html(), "<p>line one<br>line two</p>");
        assert_eq!(out.nodes[0].find_by_tag("br").len(), 1);
    }

    #[test]
    fn headings_and_hyperlinks() {
        let out = render(
            json!([
                { "nodeType": "heading-2", "data": {}, "content": [text("Title")] },
                { "nodeType": "paragraph", "data": {}, "content": [
                    { "nodeType": "hyperlink", "data": { "uri": "https://example.com/a?b=1" }, "content": [text("ext")] },
                    { "nodeType": "hyperlink", "data": { "uri": "/about" }, "content": [text("int")] },
                    { "nodeType": "hyperlink", "data": {}, "content": [text("bare")] }
                ] }
            ]),
            &RenderContext::new(),
        );
        assert_eq!(
            out.to_html(),
            "<h2>Title</h2><p><a href=\"https://example.com/a?b=1\" target=\"_blank\" rel=\"noopener noreferrer\">ext</a><a href=\"/about\">int</a>bare</p>"
        );
    }

    #[test]
    fn embedded_image_and_video_assets() {
        let out = render(
            json!([
                { "nodeType": "embedded-asset-block", "content": [], "data": { "target": asset("//images.example.net/a.jpg", "image/jpeg", "Sunset") } },
                { "nodeType": "embedded-asset-block", "content": [], "data": { "target": asset("//videos.example.net/v.mp4", "video/mp4", "Clip") } },
                { "nodeType": "embedded-asset-block", "content": [], "data": { "target": asset("//files.example.net/cv.pdf", "application/pdf", "CV") } }
            ]),
            &RenderContext::new(),
        );

        let img = out.nodes[0].find_by_tag("img");
        assert_eq!(img.len(), 1);
        assert_eq!(img[0].get_attr("src"), Some("https://images.example.net/a.jpg"));
        assert_eq!(img[0].get_attr("alt"), Some("Sunset"));

        let sources = out.nodes[1].find_by_tag("source");
        assert_eq!(sources[0].get_attr("src"), Some("https://videos.example.net/v.mp4"));
        assert_eq!(sources[0].get_attr("type"), Some("video/mp4"));

        assert!(out.nodes[2].is_empty());
        assert!(matches!(
            out.diagnostics.as_slice(),
            [Diagnostic::UnsupportedAsset { content_type: Some(ct), .. }] if ct == "application/pdf"
        ));
    }

    #[test]
    fn video_without_url_renders_fallback() {
        let out = render(
            json!([
                { "nodeType": "embedded-asset-block", "content": [], "data": { "target": { "fields": { "file": { "contentType": "video/mp4" } } } } },
                entry_block("vid-2", Some("video"), json!({ "title": "Broken" }))
            ]),
            &RenderContext::new(),
        );
        for node in &out.nodes {
            assert_eq!(node.find_by_class("media-fallback").len(), 1);
            assert!(node.text_content().contains("Video unavailable"));
            assert!(node.find_by_class("video-thumbnail").is_empty());
        }
        assert_eq!(out.diagnostics.len(), 2);
    }

    #[test]
    fn video_card_shows_thumbnail_until_activated() {
        let idle = render(json!([video_entry()]), &RenderContext::new());
        assert_eq!(idle.nodes[0].find_by_class("video-thumbnail").len(), 1);
        assert_eq!(idle.nodes[0].find_by_class("play-button").len(), 1);
        assert!(idle.nodes[0].find_by_class("video-player").is_empty());
        let thumb = idle.nodes[0].find_by_class("video-thumbnail-image");
        assert_eq!(thumb[0].get_attr("src"), Some("https://images.example.net/thumb.jpg"));

        let mut activations = VideoActivations::new();
        activations.activate("vid-1#0");
        let ctx = RenderContext::new().with_activations(activations);
        let active = render(json!([video_entry()]), &ctx);
        assert!(active.nodes[0].find_by_class("video-thumbnail").is_empty());
        let players = active.nodes[0].find_by_class("video-player");
        assert_eq!(players.len(), 1);
        assert!(players[0].has_class("video-player--enhanced"));
        assert_eq!(
            players[0].get_attr("data-src"),
            Some("https://videos.example.net/reel.mp4")
        );
    }

    #[test]
    fn video_activation_is_scoped_to_each_embed() {
        let untitled = entry_block(
            "",
            Some("video"),
            json!({ "video": asset("//videos.example.net/x.mp4", "video/mp4", "x") }),
        );
        let content = json!([video_entry(), video_entry(), untitled]);

        let idle = render(content.clone(), &RenderContext::new());
        let keys: Vec<_> = idle
            .nodes
            .iter()
            .map(|n| n.find_by_class("video-thumbnail")[0].get_attr("data-activate-video"))
            .collect();
        assert_eq!(keys, vec![Some("vid-1#0"), Some("vid-1#1"), Some("#0")]);

        let ctx = RenderContext::new().with_activations(["vid-1#1", "#0"].into_iter().collect());
        let out = render(content, &ctx);
        assert!(out.nodes[0].find_by_class("video-player").is_empty());
        assert_eq!(out.nodes[0].find_by_class("video-thumbnail").len(), 1);
        assert_eq!(out.nodes[1].find_by_class("video-player").len(), 1);
        assert_eq!(out.nodes[2].find_by_class("video-player").len(), 1);
    }

    #[test]
    fn activated_video_on_mobile_uses_native_player() {
        let ctx = RenderContext::new()
            .with_viewport(ViewportClass::Mobile)
            .with_activations(["vid-1#0"].into_iter().collect());
        let out = render(json!([video_entry()]), &ctx);
        let players = out.nodes[0].find_by_class("video-player");
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].tag, "video");
        assert!(players[0].has_class("video-player--native"));
        assert_eq!(players[0].get_attr("controls"), Some(""));
    }

    #[test]
    fn unknown_content_type_renders_nothing() {
        let out = render(
            json!([entry_block("x1", Some("unknown-type"), json!({ "title": "?" }))]),
            &RenderContext::new(),
        );
        assert_eq!(out.nodes.len(), 1);
        assert!(out.nodes[0].is_empty());
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::UnknownContentType {
                entry_id: Some("x1".into()),
                content_type: Some("unknown-type".into()),
            }]
        );
    }

    #[test]
    fn image_row_splits_width_equally() {
        let images = json!([
            asset("//images.example.net/1.jpg", "image/jpeg", "one"),
            asset("//images.example.net/2.jpg", "image/jpeg", "two"),
            asset("//images.example.net/3.jpg", "image/jpeg", "three")
        ]);
        let out = render(
            json!([entry_block("row", Some("imageRow"), json!({ "images": images }))]),
            &RenderContext::new(),
        );

        let imgs = out.nodes[0].find_by_tag("img");
        assert_eq!(imgs.len(), 3);
        for img in imgs {
            let style = img.get_attr("style").unwrap();
            assert!(style.contains("calc(33.3333% - 8px)"), "style: {style}");
            assert!(img.get_attr("src").unwrap().starts_with("https://"));
        }
        let row = out.nodes[0].find_by_class("image-row");
        assert!(row[0].get_attr("style").unwrap().contains("height: 320px"));
    }

    #[test]
    fn image_row_keeps_column_for_missing_image() {
        let images = json!([
            asset("//images.example.net/1.jpg", "image/jpeg", "one"),
            { "fields": { "title": "no file" } }
        ]);
        let out = render(
            json!([entry_block("row", Some("imageRow"), json!({ "images": images }))]),
            &RenderContext::new().with_viewport(ViewportClass::Mobile),
        );
        assert_eq!(out.nodes[0].find_by_tag("img").len(), 1);
        let missing = out.nodes[0].find_by_class("image-row-item--missing");
        assert_eq!(missing.len(), 1);
        assert!(missing[0].get_attr("style").unwrap().contains("calc(50% - 8px)"));
        assert!(matches!(
            out.diagnostics.as_slice(),
            [Diagnostic::MissingMedia { field, .. }] if field == "images[1]"
        ));
    }

    #[test]
    fn module_card_uses_accent_and_color_mode() {
        let ctx = RenderContext::new()
            .with_accent_color(CssColor::new("#ff6600").unwrap())
            .with_color_mode(ColorMode::Dark);
        let out = render(
            json!([entry_block("m1", Some("module"), json!({
                "title": "Services",
                "subtitle": "What I do",
                "image": asset("//images.example.net/m.png", "image/png", "m")
            }))]),
            &ctx,
        );
        let cards = out.nodes[0].find_by_class("module-card");
        assert_eq!(cards.len(), 1);
        assert!(cards[0].has_class("card--dark"));
        assert_eq!(
            cards[0].get_attr("style"),
            Some("--accent: #ff6600; border-color: #ff6600")
        );
        assert_eq!(out.nodes[0].find_by_class("card-title")[0].tag, "h3");
        assert!(out.nodes[0].text_content().contains("What I do"));
    }

    #[test]
    fn same_document_in_two_contexts_does_not_cross_talk() {
        let renderer = DocumentRenderer::default();
        let document = doc(json!([entry_block("m1", Some("module"), json!({ "title": "T" }))]));
        let light = renderer.render(&document, &RenderContext::new());
        let dark = renderer.render(
            &document,
            &RenderContext::new().with_color_mode(ColorMode::Dark),
        );
        assert!(light.nodes[0].find_by_class("card--light").len() == 1);
        assert!(dark.nodes[0].find_by_class("card--dark").len() == 1);
        assert!(light.nodes[0].find_by_class("card--dark").is_empty());
    }

    #[test]
    fn article_card_links_to_slug() {
        let fields = json!({
            "title": "Building a renderer",
            "slug": "building-a-renderer",
            "description": "Notes",
            "excerpt": "It started with a tree.",
            "publishDate": "2021-03-04T00:00+01:00",
            "coverImage": asset("//images.example.net/c.jpg", "image/jpeg", "cover")
        });
        let page = render(
            json!([entry_block("a1", Some("article"), fields.clone())]),
            &RenderContext::new(),
        );
        let links = page.nodes[0].find_by_class("card-link");
        assert_eq!(links[0].get_attr("href"), Some("/building-a-renderer"));
        let time = page.nodes[0].find_by_tag("time");
        assert_eq!(time[0].get_attr("datetime"), Some("2021-03-04"));
        assert!(page.nodes[0].text_content().contains("March 4, 2021"));
        assert_eq!(page.nodes[0].find_by_class("card-excerpt").len(), 1);
        assert_eq!(
            page.nodes[0].find_by_class("card-image")[0].get_attr("src"),
            Some("https://images.example.net/c.jpg")
        );
    }

    #[test]
    fn article_without_slug_is_not_a_link() {
        let out = render(
            json!([entry_block("a2", Some("article"), json!({ "title": "Draft" }))]),
            &RenderContext::new(),
        );
        assert!(out.nodes[0].find_by_tag("a").is_empty());
        assert_eq!(out.nodes[0].find_by_class("article-card").len(), 1);
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn carousel_receives_normalised_slides() {
        struct Recording;
        impl CarouselRenderer for Recording {
            fn render(&self, slides: &[crate::Slide], _ctx: &RenderContext) -> VNode {
                VNode::text(
                    slides
                        .iter()
                        .map(|s| s.src.as_str())
                        .collect::<Vec<_>>()
                        .join(","),
                )
            }
        }

        let renderer = DocumentRenderer::default().with_carousel(Recording);
        let document = doc(json!([entry_block(
            "c1",
            None,
            json!({ "media": [
                asset("//images.example.net/1.jpg", "image/jpeg", "a"),
                asset("https://videos.example.net/2.mp4", "video/mp4", "b")
            ] })
        )]));
        let out = renderer.render(&document, &RenderContext::new());
        assert_eq!(
            out.nodes[0],
            VNode::text("https://images.example.net/1.jpg,https://videos.example.net/2.mp4")
        );
    }

    #[test]
    fn static_carousel_markup() {
        let out = render(
            json!([entry_block(
                "c1",
                Some("carousel"),
                json!({ "media": [
                    asset("//images.example.net/1.jpg", "image/jpeg", "a"),
                    asset("//videos.example.net/2.mp4", "video/mp4", "b")
                ] })
            )]),
            &RenderContext::new(),
        );
        let carousel = out.nodes[0].find_by_class("carousel");
        assert_eq!(carousel[0].get_attr("data-slide-count"), Some("2"));
        assert_eq!(out.nodes[0].find_by_class("carousel-slide").len(), 2);
        assert_eq!(out.nodes[0].find_by_class("carousel-video").len(), 1);
    }

    #[test]
    fn inline_entry_is_wrapped_in_span() {
        let out = render(
            json!([{ "nodeType": "paragraph", "data": {}, "content": [
                text("see "),
                { "nodeType": "embedded-entry-inline", "content": [], "data": { "target": {
                    "sys": { "id": "m1", "contentType": { "sys": { "id": "module" } } },
                    "fields": { "title": "Inline" }
                } } }
            ] }]),
            &RenderContext::new(),
        );
        assert_eq!(out.nodes[0].find_by_class("embedded-inline").len(), 1);
    }

    #[test]
    fn teaser_mode_truncates_and_skips_embeds() {
        let ctx = RenderContext::new().with_mode(RenderMode::Teaser);
        let out = render(
            json!([
                paragraph("one"),
                video_entry(),
                paragraph("two"),
                paragraph("three")
            ]),
            &ctx,
        );
        assert_eq!(out.nodes.len(), 4);
        assert_eq!(out.to_html(), "<p>one</p><p>two</p>");
    }

    #[test]
    fn teaser_article_card_omits_excerpt() {
        let renderer = DocumentRenderer::new(CoreConfig::new(1, None, "%Y".into()).unwrap());
        let document = doc(json!([{ "nodeType": "embedded-entry-inline", "content": [], "data": { "target": {
            "sys": { "id": "a1", "contentType": { "sys": { "id": "article" } } },
            "fields": { "title": "T", "excerpt": "E" }
        } } }]));
        let page = renderer.render(&document, &RenderContext::new());
        assert_eq!(page.nodes[0].find_by_class("card-excerpt").len(), 1);

        // Inline entries inside a paragraph survive teaser truncation.
        let wrapped = doc(json!([{ "nodeType": "paragraph", "data": {}, "content": [{
            "nodeType": "embedded-entry-inline", "content": [], "data": { "target": {
                "sys": { "id": "a1", "contentType": { "sys": { "id": "article" } } },
                "fields": { "title": "T", "excerpt": "E" }
            } }
        }] }]));
        let teaser = renderer.render(&wrapped, &RenderContext::new().with_mode(RenderMode::Teaser));
        assert_eq!(teaser.nodes[0].find_by_class("article-card").len(), 1);
        assert!(teaser.nodes[0].find_by_class("card-excerpt").is_empty());
    }

    #[test]
    fn default_accent_comes_from_config() {
        let config = CoreConfig::new(2, Some(CssColor::new("teal").unwrap()), "%Y".into()).unwrap();
        let renderer = DocumentRenderer::new(config);
        let document = doc(json!([entry_block("m1", Some("module"), json!({}))]));
        let out = renderer.render(&document, &RenderContext::new());
        let card = out.nodes[0].find_by_class("card");
        assert_eq!(
            card[0].get_attr("style"),
            Some("--accent: teal; border-color: teal")
        );
    }

    #[test]
    fn never_panics_on_sparse_entries() {
        let mut content = Vec::new();
        for ct in ["module", "article", "video", "imageRow", "carousel", "other"] {
            content.push(entry_block("e", Some(ct), json!({})));
            content.push(entry_block("e", Some(ct), Value::Null));
            content.push(json!({
                "nodeType": "embedded-entry-block",
                "data": { "target": { "sys": { "contentType": { "sys": { "id": ct } } } } }
            }));
        }
        content.push(json!({ "nodeType": "embedded-entry-block" }));
        content.push(json!({ "nodeType": "embedded-asset-block", "data": { "target": {} } }));
        content.push(json!({ "nodeType": "hyperlink" }));
        content.push(json!({ "nodeType": "text" }));
        content.push(json!({}));
        let total = content.len();

        for viewport in [ViewportClass::Mobile, ViewportClass::Desktop] {
            for mode in [RenderMode::Page, RenderMode::Teaser] {
                let ctx = RenderContext::new()
                    .with_viewport(viewport)
                    .with_mode(mode)
                    .with_activations(["e#0", "#0"].into_iter().collect());
                let out = render(Value::Array(content.clone()), &ctx);
                assert_eq!(out.nodes.len(), total);
                let _ = out.to_html();
            }
        }
    }
}
