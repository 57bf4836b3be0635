//! Validated text types shared across the Folio crates.
//!
//! Content arrives from an external store that this workspace cannot validate ahead of time.
//! These types are the points where loose strings become values that are safe to embed in
//! rendered output (link paths, inline styles).

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input is not usable as a URL path segment
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    /// The input is not a colour value that is safe to place in an inline style
    #[error("invalid colour: {0}")]
    InvalidColor(String),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Article slug, used to build the `/{slug}` link of an article card.
///
/// Leading and trailing slashes are stripped. Each `/`-separated segment must be non-empty and
/// contain only ASCII alphanumerics, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    const MAX_LEN: usize = 200;

    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let raw = input.as_ref();
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(TextError::InvalidSlug(format!(
                "exceeds maximum length of {} characters",
                Self::MAX_LEN
            )));
        }

        let valid = trimmed.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        });
        if !valid {
            return Err(TextError::InvalidSlug(raw.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Site-relative path for this slug, e.g. `/my-article`.
    pub fn path(&self) -> String {
        format!("/{}", self.0)
    }
}

/// A CSS colour value (`#ff6600`, `rebeccapurple`, `rgb(10, 20, 30)`, ...).
///
/// Only the character set is checked; anything that could terminate a declaration or an
/// attribute (`;`, `"`, `<`, ...) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssColor(String);

impl CssColor {
    const MAX_LEN: usize = 64;

    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(TextError::InvalidColor(format!(
                "exceeds maximum length of {} characters",
                Self::MAX_LEN
            )));
        }

        let ok = trimmed.bytes().all(|b| {
            matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'#' | b'(' | b')' | b',' | b'.' | b'%' | b' ' | b'-')
        });
        if !ok {
            return Err(TextError::InvalidColor(trimmed.to_owned()));
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            let hex_ok = matches!(hex.len(), 3 | 4 | 6 | 8)
                && hex.bytes().all(|b| b.is_ascii_hexdigit());
            if !hex_ok {
                return Err(TextError::InvalidColor(trimmed.to_owned()));
            }
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_text_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $ty {
            type Err = TextError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text_traits!(NonEmptyText);
impl_text_traits!(Slug);
impl_text_traits!(CssColor);
