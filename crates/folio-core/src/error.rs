/// Errors raised while configuring a renderer or interpreting render options.
///
/// A render pass itself never returns an error.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("content error: {0}")]
    Content(#[from] contentful::ContentfulError),
    #[error("invalid text: {0}")]
    Text(#[from] folio_types::TextError),
}

pub type FolioResult<T> = std::result::Result<T, FolioError>;
