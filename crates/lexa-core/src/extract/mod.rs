//! Extraction of one language's entry from a parsed page.
//!
//! The extractors share a single [`Consumed`] set and must run in a fixed
//! order: examples first, so their detail lines and quotations are out of
//! the way before definitions read their senses, then definitions, then
//! pronunciations. Within each extractor sections are read in document
//! order.

mod definition;
mod example;
mod pronunciation;

use lexa_types::Pronunciations;

use crate::category::CategoryKind;
use crate::dom::{Consumed, Document, NodeId};
use crate::error::ExtractError;
use crate::locate::locate_language;
use crate::resolve::{Headings, SectionRef, resolve};
use crate::toc::index_toc;

pub use definition::{DefinitionEntry, extract_definitions};
pub use example::{ExampleEntry, extract_examples};
pub use pronunciation::{extract_pronunciations, slash_spans};

/// Everything read from the page for one language, before correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub pronunciations: Pronunciations,
    pub definitions: Vec<DefinitionEntry>,
    pub examples: Vec<ExampleEntry>,
}

/// A resolved section and the heading element its content follows.
pub type Located<'a> = (&'a SectionRef, NodeId);

/// Runs every extractor for `language`.
///
/// `None` when the page is blank or has no entry for the language. A
/// section whose anchor is missing from the page is skipped.
pub fn extract(doc: &Document, language: &str) -> Option<Extraction> {
    if doc.is_blank() {
        tracing::debug!("page is blank");
        return None;
    }

    let mut consumed = Consumed::default();
    doc.prune_furniture(&mut consumed);

    let toc = index_toc(doc);
    let scope = locate_language(doc, &toc, language)?;
    if let Some(prefix) = scope.prefix() {
        tracing::debug!("language `{language}` spans sections {prefix}*");
    }

    let headings = if toc.is_empty() {
        Headings::Direct
    } else {
        Headings::Toc(scope.bound(&toc))
    };

    let parts_of_speech = resolve(doc, &headings, CategoryKind::Definitions);
    let pronunciation_sections = resolve(doc, &headings, CategoryKind::Pronunciation);

    let parts_of_speech = locate_headings(doc, &parts_of_speech);
    let pronunciation_sections = locate_headings(doc, &pronunciation_sections);

    let examples = extract_examples(doc, &parts_of_speech, &mut consumed);
    let definitions = extract_definitions(doc, &parts_of_speech, &mut consumed);
    let pronunciations = extract_pronunciations(doc, &pronunciation_sections, &mut consumed);

    Some(Extraction {
        pronunciations,
        definitions,
        examples,
    })
}

/// Pairs each section with its heading, dropping sections whose anchor the
/// page does not contain.
pub fn locate_headings<'a>(doc: &Document, sections: &'a [SectionRef]) -> Vec<Located<'a>> {
    sections
        .iter()
        .filter_map(|section| match section_heading(doc, section) {
            Ok(heading) => Some((section, heading)),
            Err(e) => {
                tracing::warn!("skipping {} section {}: {e}", section.category, section.index);
                None
            }
        })
        .collect()
}

/// Heading element that owns the section's anchor.
///
/// Anchors are usually a headline span inside the heading, or the heading
/// itself inside a `div.mw-heading` wrapper. A bare heading carrying the id
/// is its own start.
pub fn section_heading(doc: &Document, section: &SectionRef) -> Result<NodeId, ExtractError> {
    let anchor = doc
        .get_by_id(&section.anchor)
        .ok_or_else(|| ExtractError::MissingAnchor {
            anchor: section.anchor.clone(),
        })?;

    match doc.parent(anchor) {
        Some(parent) if doc.heading_level(anchor).is_none() || doc.heading_level(parent).is_some() => {
            Ok(parent)
        }
        _ => Ok(anchor),
    }
}
