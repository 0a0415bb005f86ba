use std::env;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::source::SourceConfig;
use self::translator::TranslatorConfig;

pub mod log;
pub mod source;
pub mod translator;

pub use self::log::init_tracing;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub translator: TranslatorConfig,
    pub log: LogConfig,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn new() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            source: SourceConfig::from_lookup(&lookup),
            translator: TranslatorConfig::from_lookup(&lookup),
            log: LogConfig::from_lookup(&lookup),
        }
    }
}

pub(crate) fn parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
