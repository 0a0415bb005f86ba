use serde::{Deserialize, Serialize};

use crate::parsed;

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "ru".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `google` or `deepl`
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub api_key: String,
    /// Endpoint override; empty means the provider's own default
    #[serde(default)]
    pub api_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_key: String::new(),
            api_url: String::new(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            enabled: parsed(lookup, "LEXA_TRANSLATOR_ENABLED").unwrap_or_else(default_enabled),
            provider: lookup("LEXA_TRANSLATOR_PROVIDER")
                .map(|p| p.trim().to_lowercase())
                .unwrap_or_else(default_provider),
            from_lang: lookup("LEXA_TRANSLATE_FROM").unwrap_or_else(default_from_lang),
            to_lang: lookup("LEXA_TRANSLATE_TO").unwrap_or_else(default_to_lang),
            api_key: lookup("LEXA_TRANSLATOR_API_KEY").unwrap_or_default(),
            api_url: lookup("LEXA_TRANSLATOR_API_URL").unwrap_or_default(),
        }
    }

    /// Configured endpoint, or `fallback` when none is set.
    pub fn api_url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.api_url.trim().is_empty() {
            fallback
        } else {
            &self.api_url
        }
    }
}
