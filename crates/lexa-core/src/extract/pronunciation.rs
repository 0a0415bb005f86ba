use lexa_types::Pronunciations;

use super::Located;
use crate::dom::{Consumed, Document, NodeId};
use crate::walk::{PRONUNCIATION, Walk};

/// Transcriptions and audio of every pronunciation section, merged in
/// document order.
pub fn extract_pronunciations(
    doc: &Document,
    sections: &[Located<'_>],
    consumed: &mut Consumed,
) -> Pronunciations {
    let mut merged = Pronunciations::default();

    for (section, heading) in sections {
        let Some(found) = Walk::new(doc, *heading, &PRONUNCIATION).next() else {
            tracing::debug!("no pronunciation content under {}", section.index);
            continue;
        };

        if doc.is_tag(found, "p") {
            let text = doc.text(found, consumed).trim().to_string();
            if !text.is_empty() {
                merged.text.push(text);
            }
        } else {
            read_list(doc, found, consumed, &mut merged);
        }
        consumed.insert(found);
    }

    merged
}

fn read_list(doc: &Document, list: NodeId, consumed: &mut Consumed, out: &mut Pronunciations) {
    let items = flatten_items(doc, list, consumed);

    let live: &Consumed = consumed;
    let markers: Vec<_> = items
        .iter()
        .flat_map(|&item| doc.live_elements(item, live).filter(|&id| doc.is_tag(id, "sup")))
        .collect();
    consumed.extend(markers);

    for item in items {
        let media = doc.outermost(item, consumed, |id| {
            doc.is_tag(id, "div") && doc.has_class(id, "mediaContainer")
        });
        for container in media {
            let source = doc
                .live_elements(container, consumed)
                .find(|&id| doc.is_tag(id, "source"))
                .and_then(|id| doc.attr(id, "src"));
            if let Some(src) = source {
                out.audio.push(src.to_string());
            }
            consumed.insert(container);
        }

        let in_audio_table = doc
            .live_elements(item, consumed)
            .any(|id| doc.is_tag(id, "table") && doc.has_class(id, "audiotable"));
        let text = doc.text(item, consumed);
        if text.contains("IPA") && !in_audio_table {
            out.text.extend(slash_spans(&text));
        }
    }
}

/// List items with nested dialect lists promoted to the same level, each
/// right after the item that held it. The nested lists are consumed so
/// their text no longer counts towards the owning item.
fn flatten_items(doc: &Document, list: NodeId, consumed: &mut Consumed) -> Vec<NodeId> {
    let mut items = Vec::new();
    let children: Vec<_> = doc
        .element_children(list)
        .filter(|&id| doc.is_tag(id, "li") && !consumed.contains(id))
        .collect();

    for item in children {
        items.push(item);
        let nested = doc.outermost(item, consumed, |id| doc.is_any_tag(id, &["ul", "ol"]));
        for sublist in nested {
            consumed.insert(sublist);
            items.extend(flatten_items(doc, sublist, consumed));
        }
    }
    items
}

/// Slash-delimited spans of `text`, pairing slashes in order of appearance.
///
/// Each span keeps both slashes. A trailing unpaired slash is dropped.
pub fn slash_spans(text: &str) -> Vec<String> {
    let slashes: Vec<usize> = text.match_indices('/').map(|(i, _)| i).collect();
    slashes
        .chunks_exact(2)
        .map(|pair| text[pair[0]..=pair[1]].to_string())
        .collect()
}
