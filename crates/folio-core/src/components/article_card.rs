//! Article summary card.
//!
//! The whole card is wrapped in a link to `/{slug}`. An article without a usable slug still
//! renders, just without the link.

use super::{card_image, card_shell, text_element};
use crate::context::RenderMode;
use crate::render::RenderPass;
use crate::vnode::{Element, VNode};
use chrono::NaiveDate;
use contentful::ArticleEntry;
use std::fmt::Write;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

fn publish_date(date: NaiveDate, format: &str) -> VNode {
    let iso = date.format(ISO_DATE_FORMAT).to_string();
    let mut label = String::new();
    if write!(label, "{}", date.format(format)).is_err() {
        label.clone_from(&iso);
    }
    Element::new("time")
        .class("card-date")
        .attr("datetime", iso)
        .child(VNode::text(label))
        .into()
}

pub(crate) fn render(pass: &RenderPass<'_>, article: &ArticleEntry) -> VNode {
    let excerpt = match pass.ctx.mode {
        RenderMode::Page => text_element("p", "card-excerpt", article.excerpt.as_ref()),
        RenderMode::Teaser => None,
    };

    let body = Element::new("div")
        .class("card-body")
        .children(text_element("h3", "card-title", article.title.as_ref()))
        .children(text_element(
            "p",
            "card-description",
            article.description.as_ref(),
        ))
        .children(excerpt)
        .children(
            article
                .publish_date
                .map(|date| publish_date(date, pass.config.date_format())),
        );

    let card = card_shell(pass, "article", "article-card")
        .children(card_image(pass, article.cover_image.as_ref()))
        .child(body);

    match &article.slug {
        Some(slug) => Element::new("a")
            .class("card-link")
            .attr("href", slug.path())
            .child(card)
            .into(),
        None => card.into(),
    }
}
