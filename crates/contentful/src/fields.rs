//! Lenient extraction of entry and asset fields from resolved link targets.
//!
//! A link target looks like `{ "sys": { "id", "contentType": { "sys": { "id" } } }, "fields": {..} }`.
//! Nothing here fails: a missing or wrongly typed field reads as absent.

use crate::document::{
    ArticleEntry, Asset, CarouselEntry, EmbeddedEntry, EntryContent, ImageRowEntry, ModuleEntry,
    VideoEntry,
};
use chrono::{DateTime, NaiveDate};
use folio_types::{NonEmptyText, Slug};
use serde_json::Value;

/// Follow `path` through nested objects and return a trimmed, non-empty string.
pub(crate) fn str_at(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    let text = current.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

fn text_at(value: &Value, path: &[&str]) -> Option<NonEmptyText> {
    str_at(value, path).and_then(|s| NonEmptyText::new(s).ok())
}

/// Read an asset from a resolved link target.
///
/// Returns `None` only when `value` is not an object at all; an object with no usable fields
/// still yields an (empty) asset so the caller can report what is missing.
pub(crate) fn asset_from_value(value: &Value) -> Option<Asset> {
    if !value.is_object() {
        return None;
    }

    Some(Asset {
        id: str_at(value, &["sys", "id"]),
        title: text_at(value, &["fields", "title"]),
        url: str_at(value, &["fields", "file", "url"]),
        content_type: str_at(value, &["fields", "file", "contentType"]),
    })
}

fn asset_field(fields: &Value, name: &str) -> Option<Asset> {
    fields.get(name).and_then(asset_from_value)
}

fn asset_list(fields: &Value, name: &str) -> Vec<Asset> {
    fields
        .get(name)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(asset_from_value).collect())
        .unwrap_or_default()
}

/// Accepts full RFC 3339 timestamps, the store's minute-precision form
/// (`2021-03-04T00:00+01:00`) and bare dates. The date is taken as written.
pub(crate) fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// Read an embedded entry from a resolved link target.
pub(crate) fn entry_from_value(target: &Value) -> Option<EmbeddedEntry> {
    if !target.is_object() {
        return None;
    }

    let id = str_at(target, &["sys", "id"]);
    let content_type = str_at(target, &["sys", "contentType", "sys", "id"]);
    let fields = target.get("fields").unwrap_or(&Value::Null);

    let content = match content_type.as_deref() {
        Some("module") => EntryContent::Module(ModuleEntry {
            title: text_at(fields, &["title"]),
            subtitle: text_at(fields, &["subtitle"]),
            image: asset_field(fields, "image"),
        }),
        Some("article") => EntryContent::Article(ArticleEntry {
            title: text_at(fields, &["title"]),
            slug: str_at(fields, &["slug"]).and_then(|s| Slug::new(s).ok()),
            description: text_at(fields, &["description"]),
            excerpt: text_at(fields, &["excerpt"]),
            publish_date: str_at(fields, &["publishDate"])
                .as_deref()
                .and_then(parse_publish_date),
            cover_image: asset_field(fields, "coverImage"),
        }),
        Some("video") => EntryContent::Video(VideoEntry {
            title: text_at(fields, &["title"]),
            thumbnail: asset_field(fields, "thumbnail"),
            video: asset_field(fields, "video"),
        }),
        Some("imageRow") => EntryContent::ImageRow(ImageRowEntry {
            images: asset_list(fields, "images"),
        }),
        Some("carousel") => EntryContent::Carousel(CarouselEntry {
            media: asset_list(fields, "media"),
        }),
        None => {
            let media = asset_list(fields, "media");
            if media.is_empty() {
                EntryContent::Unknown(None)
            } else {
                EntryContent::Carousel(CarouselEntry { media })
            }
        }
        Some(other) => EntryContent::Unknown(Some(other.to_owned())),
    };

    Some(EmbeddedEntry { id, content })
}
