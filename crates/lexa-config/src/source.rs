use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parsed;

fn default_base_url() -> String {
    "https://en.wiktionary.org".to_string()
}

fn default_user_agent() -> String {
    concat!("lexa/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_retries() -> u32 {
    2
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Where entry pages are fetched from and how patiently
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extra attempts after a transport error or server error
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            max_retries: default_max_retries(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SourceConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("LEXA_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(default_base_url);

        Self {
            base_url,
            user_agent: lookup("LEXA_USER_AGENT").unwrap_or_else(default_user_agent),
            max_retries: parsed(lookup, "LEXA_MAX_RETRIES").unwrap_or_else(default_max_retries),
            timeout_seconds: parsed(lookup, "LEXA_TIMEOUT_SECONDS")
                .unwrap_or_else(default_timeout_seconds),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
