#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Anchor `{anchor}` is listed in the contents but missing from the page")]
    MissingAnchor { anchor: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionIndexError {
    #[error("Section index is empty")]
    Empty,

    #[error("Invalid section index component `{component}` in `{index}`")]
    InvalidComponent { index: String, component: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} while fetching {url}")]
    Status { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),
}
