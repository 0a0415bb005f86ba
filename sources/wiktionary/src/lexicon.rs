use std::sync::Arc;

use lexa_config::Config;
use lexa_core::{Document, PageSource, SourceError, assemble, canonical_word, extract};
use lexa_translator::Translator;
use lexa_types::WordRecord;

use crate::client::WiktionaryClient;
use crate::deepl::{self, DeeplTranslator};
use crate::error::LookupError;
use crate::google::{self, GoogleTranslator};

/// Word lookup over a page source and an optional translator.
#[derive(Clone)]
pub struct Lexicon {
    source: Arc<dyn PageSource>,
    translator: Option<Arc<dyn Translator>>,
    from_lang: String,
    to_lang: String,
}

impl Lexicon {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            translator: None,
            from_lang: String::new(),
            to_lang: String::new(),
        }
    }

    pub fn with_translator(
        mut self,
        translator: Arc<dyn Translator>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        self.translator = Some(translator);
        self.from_lang = from_lang.into();
        self.to_lang = to_lang.into();
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let source = Arc::new(WiktionaryClient::new(&config.source)?);
        let lexicon = Self::new(source);

        let settings = &config.translator;
        if !settings.enabled {
            return Ok(lexicon);
        }

        let translator: Arc<dyn Translator> = match settings.provider.as_str() {
            "google" => Arc::new(GoogleTranslator::new(
                settings.api_url_or(google::DEFAULT_API_URL).to_string(),
            )),
            "deepl" => Arc::new(DeeplTranslator::new(
                settings.api_key.clone(),
                settings.api_url_or(deepl::DEFAULT_API_URL).to_string(),
            )),
            other => return Err(LookupError::UnknownProvider(other.to_string())),
        };

        Ok(lexicon.with_translator(translator, &settings.from_lang, &settings.to_lang))
    }

    /// Looks `word` up in `language`.
    ///
    /// Yields at most one record. A page that does not exist, a blank page
    /// and a page without an entry in `language` all yield an empty list.
    pub async fn fetch(&self, word: &str, language: &str) -> Result<Vec<WordRecord>, LookupError> {
        let word = canonical_word(word);
        if word.is_empty() {
            return Ok(Vec::new());
        }
        tracing::info!("looking up `{word}` in {language}");

        let html = match self.source.fetch_page(&word).await {
            Ok(html) => html,
            Err(SourceError::NotFound(url)) => {
                tracing::info!("no page for `{word}` at {url}");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let extraction = {
            let doc = Document::parse(&html);
            extract(&doc, language)
        };
        let Some(extraction) = extraction else {
            tracing::info!("`{word}` has no {language} entry");
            return Ok(Vec::new());
        };

        let translations = self.translations(&word).await?;
        let record = assemble(&word, translations, extraction)?;
        tracing::debug!(
            "`{word}`: {} definitions, {} transcriptions",
            record.definitions.len(),
            record.pronunciations.text.len()
        );

        Ok(vec![record])
    }

    async fn translations(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let Some(translator) = &self.translator else {
            return Ok(Vec::new());
        };

        let translation = translator
            .translate(word, self.from_lang.clone(), self.to_lang.clone())
            .await?;
        Ok(translation.into_list())
    }
}
