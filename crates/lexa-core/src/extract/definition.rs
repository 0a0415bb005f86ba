use super::Located;
use crate::category::{Category, PartOfSpeech};
use crate::dom::{Consumed, Document};
use crate::section::SectionIndex;
use crate::walk::{DEFINITION, Walk};

/// Text blocks read from one part-of-speech section.
///
/// The first block is the headword line; the rest are senses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionEntry {
    pub index: SectionIndex,
    pub anchor: String,
    pub blocks: Vec<String>,
    pub part_of_speech: PartOfSpeech,
}

/// Reads paragraphs and top-level list items under each part-of-speech
/// heading until the next subsection heading.
///
/// Nested lists are not descended into; run the example extractor first so
/// their detail lines are already consumed.
pub fn extract_definitions(
    doc: &Document,
    sections: &[Located<'_>],
    consumed: &mut Consumed,
) -> Vec<DefinitionEntry> {
    let mut entries = Vec::new();

    for (section, heading) in sections {
        let Category::PartOfSpeech(part_of_speech) = section.category else {
            continue;
        };

        let mut blocks = Vec::new();
        let visited: Vec<_> = Walk::new(doc, *heading, &DEFINITION).collect();
        for node in &visited {
            if doc.is_tag(*node, "p") {
                push_block(&mut blocks, doc.text(*node, consumed));
                continue;
            }
            for item in doc.element_children(*node).filter(|&id| doc.is_tag(id, "li")) {
                push_block(&mut blocks, doc.text(item, consumed));
            }
        }
        consumed.extend(visited);

        tracing::debug!(
            "{} section {} has {} blocks",
            part_of_speech.as_str(),
            section.index,
            blocks.len()
        );
        entries.push(DefinitionEntry {
            index: section.index.clone(),
            anchor: section.anchor.clone(),
            blocks,
            part_of_speech,
        });
    }

    entries
}

fn push_block(blocks: &mut Vec<String>, text: String) {
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::extract::locate_headings;
    use crate::resolve::SectionRef;

    fn noun(anchor: &str, index: &str) -> SectionRef {
        SectionRef {
            index: index.parse().unwrap(),
            anchor: anchor.to_string(),
            category: Category::PartOfSpeech(PartOfSpeech::Noun),
        }
    }

    fn definitions_of(html: &str, sections: &[SectionRef]) -> Vec<DefinitionEntry> {
        let doc = Document::parse(html);
        let located = locate_headings(&doc, sections);
        extract_definitions(&doc, &located, &mut Consumed::default())
    }

    #[test]
    fn test_reads_headword_and_senses() {
        let entries = definitions_of(
            r#"<h4><span class="mw-headline" id="Noun">Noun</span></h4>
<p><strong>cat</strong> (plural cats)</p>
<p>   </p>
<ol><li>A small feline.</li><li>A person.<ol><li>nested sense</li></ol></li></ol>
<div class="NavFrame">Translations</div>
<ul><li>extra</li></ul>
<h4><span class="mw-headline" id="Derived_terms">Derived terms</span></h4>
<ul><li>catty</li></ul>"#,
            &[noun("Noun", "1.1")],
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].blocks,
            vec![
                "cat (plural cats)",
                "A small feline.",
                "A person.nested sense",
                "extra"
            ]
        );
    }

    #[test]
    fn test_consumed_details_are_left_out() {
        let doc = Document::parse(
            r#"<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<ol><li>A sense.<dl><dd>An example.</dd></dl></li></ol>"#,
        );
        let mut consumed = Consumed::default();
        consumed.extend(doc.elements().filter(|&id| doc.is_tag(id, "dd")));

        let sections = [noun("Noun", "1")];
        let located = locate_headings(&doc, &sections);
        let entries = extract_definitions(&doc, &located, &mut consumed);

        assert_eq!(entries[0].blocks, vec!["A sense."]);
    }

    #[test]
    fn test_second_level_heading_does_not_stop() {
        let entries = definitions_of(
            r#"<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p>run</p>
<h2><span class="mw-headline" id="Swedish">Swedish</span></h2>
<p>after language heading</p>
<h3><span class="mw-headline" id="Verb">Verb</span></h3>
<p>next section</p>"#,
            &[noun("Noun", "1.1")],
        );

        assert_eq!(entries[0].blocks, vec!["run", "after language heading"]);
    }

    #[test]
    fn test_non_part_of_speech_sections_are_ignored() {
        let entries = definitions_of(
            r#"<h3><span class="mw-headline" id="Etymology">Etymology</span></h3><p>From Latin.</p>"#,
            &[SectionRef {
                index: "1.1".parse().unwrap(),
                anchor: "Etymology".to_string(),
                category: Category::Etymology,
            }],
        );

        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_section_still_yields_entry() {
        let entries = definitions_of(
            r#"<h3><span class="mw-headline" id="Noun">Noun</span></h3><h3>Verb</h3>"#,
            &[noun("Noun", "1.2")],
        );

        assert_eq!(entries.len(), 1);
        assert!(entries[0].blocks.is_empty());
    }
}
