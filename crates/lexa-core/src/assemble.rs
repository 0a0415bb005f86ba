use lexa_types::{Definition, RecordError, WordRecord};
use unicode_normalization::UnicodeNormalization;

use crate::extract::{DefinitionEntry, ExampleEntry, Extraction};

/// Lookup form of a word: trimmed, NFC, lowercase.
pub fn canonical_word(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}

/// Display form of a word: the canonical form with its first character
/// upper-cased.
pub fn display_word(word: &str) -> String {
    let canonical = canonical_word(word);
    let mut chars = canonical.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Attaches example batches to the definition whose section contains them.
///
/// A batch belongs to a definition when its index lies below the
/// definition's, or when both share the index and the anchor. Every
/// matching batch is appended in order; batches that match no definition
/// are dropped.
pub fn correlate(definitions: Vec<DefinitionEntry>, examples: &[ExampleEntry]) -> Vec<Definition> {
    let orphans = examples
        .iter()
        .filter(|batch| !definitions.iter().any(|d| owns(d, batch)))
        .count();
    if orphans > 0 {
        tracing::debug!("dropping {orphans} example batches without a definition");
    }

    definitions
        .into_iter()
        .map(|entry| {
            let examples = examples
                .iter()
                .filter(|batch| owns(&entry, batch))
                .flat_map(|batch| batch.examples.iter().cloned())
                .collect();

            let mut blocks = entry.blocks.into_iter();
            let additional_info = blocks.next().unwrap_or_default();

            Definition {
                part_of_speech: entry.part_of_speech.record_label().to_string(),
                additional_info,
                text: blocks.collect(),
                examples,
            }
        })
        .collect()
}

// Pages without contents give every section the same index, so equal
// indices only match within one heading.
fn owns(definition: &DefinitionEntry, batch: &ExampleEntry) -> bool {
    definition.index.is_ancestor_of(&batch.index)
        || (definition.index == batch.index && definition.anchor == batch.anchor)
}

/// Builds the final record for `word`.
pub fn assemble(
    word: &str,
    translations: Vec<String>,
    extraction: Extraction,
) -> Result<WordRecord, RecordError> {
    let definitions = correlate(extraction.definitions, &extraction.examples);
    WordRecord::new(
        display_word(word),
        translations,
        extraction.pronunciations,
        definitions,
    )
}
