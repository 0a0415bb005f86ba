use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    pub confidence: Option<f32>,
    /// Dictionary-style alternatives, most specific first
    pub alternatives: Vec<String>,
}

impl Translation {
    /// Translations to show for a word: the alternatives when the provider
    /// gave any, otherwise the single overall translation.
    pub fn into_list(self) -> Vec<String> {
        if !self.alternatives.is_empty() {
            self.alternatives
        } else if self.text.trim().is_empty() {
            Vec::new()
        } else {
            vec![self.text]
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
