use crate::category::normalize_label;
use crate::dom::Document;
use crate::section::SectionIndex;

/// One line of the page's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub index: SectionIndex,
    /// Id of the heading element the entry links to
    pub anchor: String,
    /// Heading text as displayed
    pub text: String,
    /// Heading text after [`normalize_label`]
    pub label: String,
}

impl TocEntry {
    pub fn new(index: SectionIndex, anchor: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        Self {
            index,
            anchor: anchor.into(),
            label: normalize_label(&text),
            text,
        }
    }
}

/// Reads the table of contents in document order.
///
/// Each `span.toctext` sits inside a link whose `href` names the anchor,
/// next to a `span.tocnumber` holding the dotted index. Returns an empty
/// list for pages without contents markup.
pub fn index_toc(doc: &Document) -> Vec<TocEntry> {
    doc.elements()
        .filter(|&id| doc.is_tag(id, "span") && doc.has_class(id, "toctext"))
        .filter_map(|text_span| {
            let link = doc.parent(text_span).filter(|&p| doc.is_tag(p, "a"))?;
            let anchor = doc.attr(link, "href")?.trim_start_matches('#');
            let number = doc
                .element_children(link)
                .find(|&c| doc.is_tag(c, "span") && doc.has_class(c, "tocnumber"))?;

            let raw_index = doc.raw_text(number);
            match raw_index.parse::<SectionIndex>() {
                Ok(index) => Some(TocEntry::new(index, anchor, doc.raw_text(text_span))),
                Err(e) => {
                    tracing::debug!("skipping contents entry `{anchor}`: {e}");
                    None
                }
            }
        })
        .collect()
}
