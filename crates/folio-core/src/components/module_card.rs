use super::{card_image, card_shell, text_element};
use crate::render::RenderPass;
use crate::vnode::{Element, VNode};
use contentful::ModuleEntry;

/// Titled summary card: image, title, subtitle.
pub(crate) fn render(pass: &RenderPass<'_>, module: &ModuleEntry) -> VNode {
    let body = Element::new("div")
        .class("card-body")
        .children(text_element("h3", "card-title", module.title.as_ref()))
        .children(text_element("p", "card-subtitle", module.subtitle.as_ref()));

    card_shell(pass, "section", "module-card")
        .children(card_image(pass, module.image.as_ref()))
        .child(body)
        .into()
}
