use serde::{Deserialize, Serialize};

/// One looked-up word with everything extracted for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    pub translations: Vec<String>,
    pub pronunciations: Pronunciations,
    pub definitions: Vec<Definition>,
}

/// Merged view over every pronunciation section of the word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pronunciations {
    /// Transcriptions, slash delimiters included
    pub text: Vec<String>,
    /// Audio file locators
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Definition {
    /// Empty when the section did not name a part of speech
    pub part_of_speech: String,
    /// Headword line or usage note preceding the senses
    pub additional_info: String,
    pub text: Vec<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Word must not be empty")]
    EmptyWord,

    #[error("Invalid definitions: {0}")]
    InvalidDefinitions(String),

    #[error("Invalid record: {0}")]
    Json(#[from] serde_json::Error),
}

impl WordRecord {
    pub fn new(
        word: String,
        translations: Vec<String>,
        pronunciations: Pronunciations,
        definitions: Vec<Definition>,
    ) -> Result<Self, RecordError> {
        if word.trim().is_empty() {
            return Err(RecordError::EmptyWord);
        }

        Ok(Self {
            word,
            translations,
            pronunciations,
            definitions,
        })
    }
}

impl TryFrom<serde_json::Value> for WordRecord {
    type Error = RecordError;

    /// Rejects a malformed definitions collection before building the record
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value.get("definitions") {
            None => {}
            Some(serde_json::Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_object() {
                        return Err(RecordError::InvalidDefinitions(format!(
                            "entry {i} is not a definition object"
                        )));
                    }
                    serde_json::from_value::<Definition>(item.clone()).map_err(|e| {
                        RecordError::InvalidDefinitions(format!("entry {i}: {e}"))
                    })?;
                }
            }
            Some(other) => {
                return Err(RecordError::InvalidDefinitions(format!(
                    "expected a list, found {other}"
                )));
            }
        }

        let record: WordRecordFields = serde_json::from_value(value)?;
        WordRecord::new(
            record.word,
            record.translations,
            record.pronunciations,
            record.definitions,
        )
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct WordRecordFields {
    word: String,
    translations: Vec<String>,
    pronunciations: Pronunciations,
    definitions: Vec<Definition>,
}
