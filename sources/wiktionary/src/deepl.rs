use async_trait::async_trait;
use lexa_translator::{LanguageCode, TranslateError, Translation, Translator};

pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

#[derive(Clone)]
pub struct DeeplTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeeplTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    /// First entry of the `translations` array of a DeepL response.
    async fn first_translation(
        &self,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(params)
            .send()
            .await?;

        match response.status().as_u16() {
            429 => return Err(TranslateError::RateLimitExceeded),
            401 | 403 => return Err(TranslateError::AuthenticationError),
            _ if !response.status().is_success() => {
                return Err(TranslateError::ApiError(format!(
                    "HTTP {}",
                    response.status()
                )));
            }
            _ => {}
        }

        let mut json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {e}")))?;

        match json["translations"].get_mut(0) {
            Some(first) => Ok(first.take()),
            None => Err(TranslateError::ApiError(
                "No translation in response".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Translator for DeeplTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let source_lang = from.to_uppercase();
        let target_lang = to.to_uppercase();
        let first = self
            .first_translation(&[
                ("text", text),
                ("source_lang", source_lang.as_str()),
                ("target_lang", target_lang.as_str()),
            ])
            .await?;

        let translated_text = first["text"]
            .as_str()
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text.to_string(),
            from,
            to,
            provider: "deepl".to_string(),
            confidence: None,
            alternatives: vec![],
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let first = self
            .first_translation(&[("text", text), ("target_lang", "EN")])
            .await?;

        first["detected_source_language"]
            .as_str()
            .map(str::to_lowercase)
            .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
    }
}
