//! Fixed-height strip of N equal-width images.

use super::{image, media_fallback};
use crate::constants::MEDIA_FALLBACK_MESSAGE;
use crate::diagnostics::Diagnostic;
use crate::layout::ColumnWidth;
use crate::render::RenderPass;
use crate::vnode::{Element, VNode};
use contentful::ImageRowEntry;

pub(crate) fn render(
    pass: &mut RenderPass<'_>,
    entry_id: Option<&str>,
    row: &ImageRowEntry,
) -> VNode {
    if row.images.is_empty() {
        pass.diagnostics.record(Diagnostic::MissingMedia {
            entry_id: entry_id.map(str::to_owned),
            field: "images".into(),
        });
        return media_fallback(MEDIA_FALLBACK_MESSAGE);
    }

    let width = ColumnWidth::equal_share(row.images.len(), pass.layout.image_row_gutter_px).css();
    let item_style = format!("width: {width}; height: 100%; object-fit: cover");

    let mut items: Vec<VNode> = Vec::with_capacity(row.images.len());
    for (index, asset) in row.images.iter().enumerate() {
        let item = match image(Some(asset), "image-row-item") {
            Some(img) => img,
            None => {
                pass.diagnostics.record(Diagnostic::MissingMedia {
                    entry_id: entry_id.map(str::to_owned),
                    field: format!("images[{index}]"),
                });
                // Keeps the column so the remaining images do not stretch.
                Element::new("div")
                    .class("image-row-item")
                    .class("image-row-item--missing")
            }
        };
        items.push(item.attr("style", item_style.as_str()).into());
    }

    Element::new("div")
        .class("image-row")
        .attr(
            "style",
            format!(
                "display: flex; justify-content: space-between; height: {}px",
                pass.layout.image_row_height_px
            ),
        )
        .children(items)
        .into()
}
