use lexa_core::SourceError;
use lexa_translator::TranslateError;
use lexa_types::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Page source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("Could not build record: {0}")]
    Record(#[from] RecordError),

    #[error("Unknown translation provider `{0}`")]
    UnknownProvider(String),
}
