use std::sync::LazyLock;

use regex::Regex;

use super::Located;
use crate::category::Category;
use crate::dom::{Consumed, Document};
use crate::section::SectionIndex;
use crate::walk::{EXAMPLE_SEEK, Walk};

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex"));

/// Usage examples found under one part-of-speech heading.
///
/// Keyed by the heading's index; correlation with definitions happens
/// later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    pub index: SectionIndex,
    pub anchor: String,
    pub examples: Vec<String>,
    pub category: Category,
}

/// Collects the detail lines of each consecutive numbered list after the
/// heading, one batch per list.
///
/// Detail lines and every list nested in a numbered list are consumed, so
/// the definition extractor only sees the senses themselves.
pub fn extract_examples(
    doc: &Document,
    sections: &[Located<'_>],
    consumed: &mut Consumed,
) -> Vec<ExampleEntry> {
    let mut batches = Vec::new();

    for (section, heading) in sections {
        let Some(mut list) = Walk::new(doc, *heading, &EXAMPLE_SEEK).next() else {
            tracing::debug!("no numbered list under {}", section.index);
            continue;
        };

        loop {
            let mut examples = Vec::new();
            for detail in doc.outermost(list, consumed, |id| doc.is_tag(id, "dd")) {
                let text = clean_example(&doc.text(detail, consumed));
                if !text.is_empty() {
                    examples.push(text);
                }
                consumed.insert(detail);
            }

            let nested = doc.outermost(list, consumed, |id| doc.is_any_tag(id, &["ul", "ol"]));
            consumed.extend(nested);

            batches.push(ExampleEntry {
                index: section.index.clone(),
                anchor: section.anchor.clone(),
                examples,
                category: section.category,
            });

            match doc.next_element_sibling(list) {
                Some(next) if doc.is_tag(next, "ol") => list = next,
                _ => break,
            }
        }
    }

    batches
}

/// Example text with citation parentheses removed.
fn clean_example(text: &str) -> String {
    PARENTHETICAL.replace_all(text.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::category::PartOfSpeech;
    use crate::extract::locate_headings;
    use crate::resolve::SectionRef;

    fn verb() -> SectionRef {
        SectionRef {
            index: "1.2".parse().unwrap(),
            anchor: "Verb".to_string(),
            category: Category::PartOfSpeech(PartOfSpeech::Verb),
        }
    }

    #[test]
    fn test_clean_example() {
        assert_eq!(clean_example("  I ran. (colloquial) "), "I ran.");
        assert_eq!(clean_example("(1851) Call me Ishmael (Melville)."), "Call me Ishmael .");
        assert_eq!(clean_example("(only a note)"), "");
    }

    #[test]
    fn test_collects_consecutive_numbered_lists() {
        let doc = Document::parse(
            r#"<h4><span class="mw-headline" id="Verb">Verb</span></h4>
<p>run</p>
<ol><li>To move.<dl><dd>He ran home.</dd><dd>(archaic)</dd></dl></li></ol>
<ol><li>To operate.<dl><dd>Run the engine.</dd></dl><ul><li>quotation</li></ul></li></ol>
<p>usage notes</p>
<ol><li>Not reached.<dl><dd>Skipped.</dd></dl></li></ol>"#,
        );
        let sections = [verb()];
        let located = locate_headings(&doc, &sections);
        let mut consumed = Consumed::default();

        let batches = extract_examples(&doc, &located, &mut consumed);

        let summary: Vec<_> = batches
            .iter()
            .map(|b| (b.index.to_string(), b.examples.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("1.2".to_string(), vec!["He ran home.".to_string()]),
                ("1.2".to_string(), vec!["Run the engine.".to_string()]),
            ]
        );

        let quotation = doc.elements().find(|&id| doc.is_tag(id, "ul")).unwrap();
        assert!(consumed.contains(quotation));
    }

    #[test]
    fn test_list_without_details_yields_empty_batch() {
        let doc = Document::parse(
            r#"<h4><span class="mw-headline" id="Verb">Verb</span></h4><ol><li>To move.</li></ol>"#,
        );
        let sections = [verb()];
        let located = locate_headings(&doc, &sections);

        let batches = extract_examples(&doc, &located, &mut Consumed::default());
        assert_eq!(batches.len(), 1);
        assert!(batches[0].examples.is_empty());
    }

    #[test]
    fn test_seek_stops_at_next_section() {
        let doc = Document::parse(
            r#"<h4><span class="mw-headline" id="Verb">Verb</span></h4>
<p>run</p>
<h4><span class="mw-headline" id="Noun">Noun</span></h4>
<ol><li>A run.<dl><dd>Not a verb example.</dd></dl></li></ol>"#,
        );
        let sections = [verb()];
        let located = locate_headings(&doc, &sections);

        assert!(extract_examples(&doc, &located, &mut Consumed::default()).is_empty());
    }
}
