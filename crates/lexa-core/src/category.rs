use std::fmt;

/// Part-of-speech headings recognized as definition sections, in the order
/// the direct-heading fallback searches for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Article,
    Preposition,
    Conjunction,
    ProperNoun,
    Letter,
    Character,
    Phrase,
    Proverb,
    Idiom,
    Symbol,
    Syllable,
    Numeral,
    Initialism,
    Interjection,
    /// Generic "Definitions" heading that names no part of speech
    Definitions,
    Pronoun,
    Particle,
    Predicative,
    Participle,
    Suffix,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 25] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Determiner,
        PartOfSpeech::Article,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::ProperNoun,
        PartOfSpeech::Letter,
        PartOfSpeech::Character,
        PartOfSpeech::Phrase,
        PartOfSpeech::Proverb,
        PartOfSpeech::Idiom,
        PartOfSpeech::Symbol,
        PartOfSpeech::Syllable,
        PartOfSpeech::Numeral,
        PartOfSpeech::Initialism,
        PartOfSpeech::Interjection,
        PartOfSpeech::Definitions,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Particle,
        PartOfSpeech::Predicative,
        PartOfSpeech::Participle,
        PartOfSpeech::Suffix,
    ];

    /// Normalized heading label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::ProperNoun => "proper noun",
            PartOfSpeech::Letter => "letter",
            PartOfSpeech::Character => "character",
            PartOfSpeech::Phrase => "phrase",
            PartOfSpeech::Proverb => "proverb",
            PartOfSpeech::Idiom => "idiom",
            PartOfSpeech::Symbol => "symbol",
            PartOfSpeech::Syllable => "syllable",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Initialism => "initialism",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Definitions => "definitions",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Predicative => "predicative",
            PartOfSpeech::Participle => "participle",
            PartOfSpeech::Suffix => "suffix",
        }
    }

    /// Label written to the record; the generic heading maps to "".
    pub fn record_label(&self) -> &'static str {
        match self {
            PartOfSpeech::Definitions => "",
            other => other.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pos| pos.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Etymology,
    Pronunciation,
    PartOfSpeech(PartOfSpeech),
}

impl Category {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "etymology" => Some(Category::Etymology),
            "pronunciation" => Some(Category::Pronunciation),
            other => PartOfSpeech::from_label(other).map(Category::PartOfSpeech),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Etymology => "etymology",
            Category::Pronunciation => "pronunciation",
            Category::PartOfSpeech(pos) => pos.as_str(),
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Etymology => CategoryKind::Etymology,
            Category::Pronunciation => CategoryKind::Pronunciation,
            Category::PartOfSpeech(_) => CategoryKind::Definitions,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Etymology,
    Pronunciation,
    Definitions,
}

impl CategoryKind {
    /// Categories this kind accepts, in fallback search order.
    pub fn checklist(&self) -> Vec<Category> {
        match self {
            CategoryKind::Etymology => vec![Category::Etymology],
            CategoryKind::Pronunciation => vec![Category::Pronunciation],
            CategoryKind::Definitions => PartOfSpeech::ALL
                .into_iter()
                .map(Category::PartOfSpeech)
                .collect(),
        }
    }
}

/// Lowercased heading label with its disambiguating number removed
/// ("Etymology 2" → "etymology").
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim()
        .to_lowercase()
}

/// Id form of a checklist label as used by pages without contents
/// ("proper noun" → "Proper Noun").
pub fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
