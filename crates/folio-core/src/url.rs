//! Asset URL normalisation.
//!
//! The content store hands out protocol-relative asset URLs (`//host/path`). Every place that
//! emits an asset URL goes through [`asset_src`] so the rewrite cannot be missed.

use contentful::Asset;

/// Rewrite a protocol-relative URL to `https:`; anything else is returned trimmed but
/// otherwise unchanged. Applying it twice is the same as applying it once.
pub fn normalize_asset_url(url: &str) -> String {
    let trimmed = url.trim();
    match trimmed.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => trimmed.to_owned(),
    }
}

/// Normalised source URL of an asset, if it has one.
pub fn asset_src(asset: &Asset) -> Option<String> {
    asset
        .url
        .as_deref()
        .map(normalize_asset_url)
        .filter(|url| !url.is_empty())
}
