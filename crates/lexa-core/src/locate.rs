use unicode_normalization::UnicodeNormalization;

use crate::dom::{Document, NodeId};
use crate::section::SectionIndex;
use crate::toc::TocEntry;

/// Part of the page that belongs to the requested language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageScope {
    /// Sections strictly below this contents index.
    Section(SectionIndex),
    /// Page has no contents but does carry the language heading.
    WholePage,
}

impl LanguageScope {
    /// Contents entries inside the language's subtree, in document order.
    pub fn bound<'a>(&self, entries: &'a [TocEntry]) -> Vec<&'a TocEntry> {
        match self {
            LanguageScope::Section(root) => entries
                .iter()
                .filter(|entry| root.is_ancestor_of(&entry.index))
                .collect(),
            LanguageScope::WholePage => entries.iter().collect(),
        }
    }

    /// Prefix every index of the subtree starts with, e.g. `"1."`.
    pub fn prefix(&self) -> Option<String> {
        match self {
            LanguageScope::Section(root) => Some(format!("{root}.")),
            LanguageScope::WholePage => None,
        }
    }
}

/// Finds the requested language on the page.
///
/// With contents present only the contents are consulted, and the first
/// matching entry wins. Without contents the page's headings are scanned
/// instead. `None` means the word has no entry in that language.
pub fn locate_language(doc: &Document, toc: &[TocEntry], language: &str) -> Option<LanguageScope> {
    let wanted = fold(language);
    if wanted.is_empty() {
        return None;
    }

    if !toc.is_empty() {
        let found = toc.iter().find(|entry| fold(&entry.text) == wanted);
        if found.is_none() {
            tracing::debug!("no contents entry for language `{language}`");
        }
        return found.map(|entry| LanguageScope::Section(entry.index.clone()));
    }

    let has_heading = doc
        .elements()
        .filter(|&id| is_headline(doc, id))
        .any(|id| fold(&doc.raw_text(id)) == wanted);

    if has_heading {
        Some(LanguageScope::WholePage)
    } else {
        tracing::debug!("no heading for language `{language}`");
        None
    }
}

fn is_headline(doc: &Document, id: NodeId) -> bool {
    (doc.is_tag(id, "span") && doc.has_class(id, "mw-headline"))
        || (doc.heading_level(id).is_some() && !doc.is_tag(id, "div"))
}

fn fold(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}
