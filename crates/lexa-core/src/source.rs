use crate::error::SourceError;

/// Anything that can hand back the raw HTML of an entry page.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page for an already canonicalized title
    async fn fetch_page(&self, title: &str) -> Result<String, SourceError>;
}
