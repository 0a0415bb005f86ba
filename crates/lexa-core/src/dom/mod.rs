//! Parsed page and the read-only queries extraction needs.
//!
//! A [`Document`] is never modified after [`Document::parse`]. Parts of the
//! page that one extractor has used up are recorded in a [`Consumed`] set
//! instead, and every text or descendant query can be told to skip them.

mod arena;
mod sink;

use std::collections::HashSet;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use arena::Arena;
pub use arena::NodeId;
use sink::ArenaSink;

/// Classes of page furniture that never carry entry content.
const UNWANTED_CLASSES: &[&str] = &["sister-wikipedia", "thumb", "reference", "cited-source"];

pub struct Document {
    arena: Arena,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let html = html.replace(">\n<", "><");
        let arena = parse_document(ArenaSink::new(), ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_arena();

        tracing::trace!("parsed page into {} nodes", arena.len());
        Self { arena }
    }

    pub fn root(&self) -> NodeId {
        self.arena.document()
    }

    /// True when the page has no element inside `<body>`.
    pub fn is_blank(&self) -> bool {
        match self.elements().find(|&id| self.is_tag(id, "body")) {
            Some(body) => !self
                .arena
                .children(body)
                .any(|child| self.arena.is_element(child)),
            None => true,
        }
    }

    /// Marks sidebars, thumbnails, footnote references and citation sources
    /// as consumed so no extractor reads them.
    pub fn prune_furniture(&self, consumed: &mut Consumed) {
        let unwanted: Vec<_> = self
            .elements()
            .filter(|&id| UNWANTED_CLASSES.iter().any(|class| self.has_class(id, class)))
            .collect();

        tracing::debug!("pruning {} furniture elements", unwanted.len());
        consumed.extend(unwanted);
    }

    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.arena.get_by_id(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.parent(id)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.arena.element_name(id).map(|name| name.as_ref())
    }

    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag(id) == Some(tag)
    }

    pub fn is_any_tag(&self, id: NodeId, tags: &[&str]) -> bool {
        self.tag(id).is_some_and(|t| tags.contains(&t))
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.arena.element_classes(id)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.arena.get_attr(id, name)
    }

    /// Section heading level of an element.
    ///
    /// Recognizes `h1`..`h6` as well as the `div.mw-heading mw-headingN`
    /// wrappers newer skins put around headings.
    pub fn heading_level(&self, id: NodeId) -> Option<u8> {
        heading_level(self.tag(id)?, self.classes(id))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena.children(id)
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena
            .children(id)
            .filter(|&child| self.arena.is_element(child))
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.arena.next_sibling(id);
        while let Some(node) = current {
            if self.arena.is_element(node) {
                return Some(node);
            }
            current = self.arena.next_sibling(node);
        }
        None
    }

    /// Every element of the page in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        Descendants::new(self, self.root(), None).filter(|&id| self.arena.is_element(id))
    }

    /// Descendant elements of `id` in document order, skipping consumed
    /// subtrees.
    pub fn live_elements<'a>(
        &'a self,
        id: NodeId,
        consumed: &'a Consumed,
    ) -> impl Iterator<Item = NodeId> + 'a {
        Descendants::new(self, id, Some(consumed)).filter(|&node| self.arena.is_element(node))
    }

    /// Outermost descendants of `id` matching `predicate`; matches nested
    /// inside an earlier match are not reported.
    pub fn outermost<F>(&self, id: NodeId, consumed: &Consumed, predicate: F) -> Vec<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.arena.children(id).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if consumed.contains(node) {
                continue;
            }
            if self.arena.is_element(node) && predicate(node) {
                found.push(node);
                continue;
            }
            let mut children: Vec<_> = self.arena.children(node).collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// Concatenated text below `id`, leaving out consumed subtrees.
    pub fn text(&self, id: NodeId, consumed: &Consumed) -> String {
        let mut out = String::new();
        if consumed.contains(id) {
            return out;
        }
        if let Some(text) = self.arena.text_content(id) {
            out.push_str(text);
        }
        for node in Descendants::new(self, id, Some(consumed)) {
            if let Some(text) = self.arena.text_content(node) {
                out.push_str(text);
            }
        }
        out
    }

    /// Text below `id` ignoring consumption.
    pub fn raw_text(&self, id: NodeId) -> String {
        self.text(id, &Consumed::default())
    }
}

pub(crate) fn heading_level(tag: &str, classes: &[String]) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        "div" if classes.iter().any(|c| c == "mw-heading") => classes
            .iter()
            .filter_map(|c| c.strip_prefix("mw-heading"))
            .find_map(|level| level.parse().ok()),
        _ => None,
    }
}

/// Nodes whose subtrees have already been used by an extractor.
#[derive(Debug, Default, Clone)]
pub struct Consumed {
    nodes: HashSet<NodeId>,
}

impl Consumed {
    pub fn insert(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Extend<NodeId> for Consumed {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

/// Pre-order walk below a node, excluding the node itself.
struct Descendants<'a> {
    doc: &'a Document,
    skip: Option<&'a Consumed>,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(doc: &'a Document, root: NodeId, skip: Option<&'a Consumed>) -> Self {
        let mut descendants = Self {
            doc,
            skip,
            stack: Vec::new(),
        };
        descendants.push_children(root);
        descendants
    }

    fn push_children(&mut self, id: NodeId) {
        let start = self.stack.len();
        self.stack.extend(self.doc.arena.children(id));
        self.stack[start..].reverse();
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            if self.skip.is_some_and(|consumed| consumed.contains(id)) {
                continue;
            }
            self.push_children(id);
            return Some(id);
        }
    }
}
