use async_trait::async_trait;
use lexa_translator::{LanguageCode, TranslateError, Translation, Translator};

pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Keyless Google Translate endpoint that also returns dictionary terms.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, TranslateError> {
        let response = self.client.get(&self.api_url).query(params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let json = self
            .query(&[
                ("client", "gtx"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                ("dt", "t"),
                ("dt", "bd"),
                ("q", text),
            ])
            .await?;

        let segments = json[0]
            .as_array()
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;
        let translated_text: String = segments
            .iter()
            .filter_map(|segment| segment[0].as_str())
            .collect();

        // First dictionary block: [part of speech, [terms...], ...]
        let alternatives = json[1][0][1]
            .as_array()
            .map(|terms| {
                terms
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
            confidence: json[6].as_f64().map(|c| c as f32),
            alternatives,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let json = self
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", "en"),
                ("dt", "t"),
                ("q", text),
            ])
            .await?;

        json[2]
            .as_str()
            .map(str::to_lowercase)
            .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
    }
}
