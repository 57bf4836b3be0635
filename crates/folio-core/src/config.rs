//! Core renderer configuration.
//!
//! Configuration is resolved once at process startup and then passed into the renderer.
//! Nothing in this crate reads environment variables itself; the binaries read them and hand
//! the raw values to the `*_from_env_value` helpers below.

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TEASER_BLOCK_LIMIT};
use crate::{FolioError, FolioResult};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use folio_types::CssColor;
use std::fmt::Write;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    teaser_block_limit: usize,
    default_accent: Option<CssColor>,
    date_format: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidInput` if `teaser_block_limit` is zero or `date_format` is
    /// not a valid `chrono` format string.
    pub fn new(
        teaser_block_limit: usize,
        default_accent: Option<CssColor>,
        date_format: String,
    ) -> FolioResult<Self> {
        if teaser_block_limit == 0 {
            return Err(FolioError::InvalidInput(
                "teaser_block_limit must be at least 1".into(),
            ));
        }
        validate_date_format(&date_format)?;

        Ok(Self {
            teaser_block_limit,
            default_accent,
            date_format,
        })
    }

    pub fn teaser_block_limit(&self) -> usize {
        self.teaser_block_limit
    }

    /// Accent colour used when the render context does not supply one.
    pub fn default_accent(&self) -> Option<&CssColor> {
        self.default_accent.as_ref()
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            teaser_block_limit: DEFAULT_TEASER_BLOCK_LIMIT,
            default_accent: None,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

/// Publish dates are formatted with `date_format`, so it is trial-formatted against a date.
/// Malformed strings and time-of-day specifiers (`%H`, `%M`, ...) both fail here.
fn validate_date_format(format: &str) -> FolioResult<()> {
    if format.trim().is_empty() {
        return Err(FolioError::InvalidInput(
            "date_format cannot be empty".into(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FolioError::InvalidInput(format!(
            "date_format is not a valid format string: {format}"
        )));
    }
    let mut sample = String::new();
    if write!(sample, "{}", NaiveDate::default().format(format)).is_err() {
        return Err(FolioError::InvalidInput(format!(
            "date_format cannot format a calendar date: {format}"
        )));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the teaser block limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_TEASER_BLOCK_LIMIT`].
pub fn teaser_block_limit_from_env_value(value: Option<String>) -> FolioResult<usize> {
    match non_blank(value) {
        None => Ok(DEFAULT_TEASER_BLOCK_LIMIT),
        Some(v) => v.parse::<usize>().map_err(|e| {
            FolioError::InvalidInput(format!("invalid teaser block limit '{v}': {e}"))
        }),
    }
}

/// Parse the default accent colour from an optional string value.
pub fn accent_color_from_env_value(value: Option<String>) -> FolioResult<Option<CssColor>> {
    Ok(non_blank(value).map(CssColor::new).transpose()?)
}

/// Resolve the publish date format, falling back to [`DEFAULT_DATE_FORMAT`].
pub fn date_format_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let default = CoreConfig::default();
        let built = CoreConfig::new(
            DEFAULT_TEASER_BLOCK_LIMIT,
            None,
            DEFAULT_DATE_FORMAT.to_owned(),
        )
        .unwrap();
        assert_eq!(default, built);
    }

    #[test]
    fn rejects_zero_teaser_limit() {
        let err = CoreConfig::new(0, None, DEFAULT_DATE_FORMAT.into()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(msg) if msg.contains("at least 1")));
    }

    #[test]
    fn rejects_bad_date_format() {
        assert!(CoreConfig::new(1, None, "%Q %".into()).is_err());
        assert!(CoreConfig::new(1, None, "  ".into()).is_err());
        assert!(CoreConfig::new(1, None, "%d/%m/%Y".into()).is_ok());
    }

    #[test]
    fn rejects_time_of_day_in_date_format() {
        let err = CoreConfig::new(1, None, "%Y %H:%M".into()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(msg) if msg.contains("calendar date")));
        assert!(CoreConfig::new(1, None, "%B %-d, %Y %H:%M".into()).is_err());
        assert!(CoreConfig::new(1, None, "%A %e %b %Y".into()).is_ok());
    }

    #[test]
    fn teaser_limit_env_values() {
        assert_eq!(
            teaser_block_limit_from_env_value(None).unwrap(),
            DEFAULT_TEASER_BLOCK_LIMIT
        );
        assert_eq!(
            teaser_block_limit_from_env_value(Some("  ".into())).unwrap(),
            DEFAULT_TEASER_BLOCK_LIMIT
        );
        assert_eq!(
            teaser_block_limit_from_env_value(Some(" 4 ".into())).unwrap(),
            4
        );
        assert!(teaser_block_limit_from_env_value(Some("four".into())).is_err());
    }

    #[test]
    fn accent_env_values() {
        assert_eq!(accent_color_from_env_value(None).unwrap(), None);
        assert_eq!(
            accent_color_from_env_value(Some("#ff6600".into()))
                .unwrap()
                .unwrap()
                .as_str(),
            "#ff6600"
        );
        assert!(matches!(
            accent_color_from_env_value(Some("red;".into())),
            Err(FolioError::Text(_))
        ));
    }

    #[test]
    fn date_format_env_value_falls_back() {
        assert_eq!(date_format_from_env_value(None), DEFAULT_DATE_FORMAT);
        assert_eq!(date_format_from_env_value(Some("%Y".into())), "%Y");
    }
}
