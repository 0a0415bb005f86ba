use crate::category::{Category, CategoryKind, title_case};
use crate::dom::Document;
use crate::section::SectionIndex;
use crate::toc::TocEntry;

/// A heading classified into one of the categories extraction cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRef {
    pub index: SectionIndex,
    pub anchor: String,
    pub category: Category,
}

/// Where the resolver reads headings from.
#[derive(Debug, Clone)]
pub enum Headings<'a> {
    /// Contents entries bounded to the language's subtree
    Toc(Vec<&'a TocEntry>),
    /// Page without contents; headings are looked up by id
    Direct,
}

/// Sections of the given kind, in the order the headings are listed.
///
/// Repeated categories (two "Noun" sections under different etymologies)
/// are all kept, each with its own anchor. Contents that list nothing of
/// this kind resolve to an empty list.
pub fn resolve(doc: &Document, headings: &Headings<'_>, kind: CategoryKind) -> Vec<SectionRef> {
    let sections: Vec<SectionRef> = match headings {
        Headings::Toc(entries) => entries
            .iter()
            .filter_map(|entry| {
                let category = Category::from_label(&entry.label)?;
                (category.kind() == kind).then(|| SectionRef {
                    index: entry.index.clone(),
                    anchor: entry.anchor.clone(),
                    category,
                })
            })
            .collect(),
        Headings::Direct => kind
            .checklist()
            .into_iter()
            .filter_map(|category| {
                let anchor = title_case(category.as_str());
                doc.get_by_id(&anchor).map(|_| SectionRef {
                    index: SectionIndex::synthetic(),
                    anchor,
                    category,
                })
            })
            .collect(),
    };

    tracing::debug!("resolved {} {kind:?} sections", sections.len());
    sections
}
