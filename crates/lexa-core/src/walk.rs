//! Forward walk over the siblings that follow a section heading.
//!
//! Every extractor reads a section the same way: start at the heading, look
//! at each following element, and decide whether to skip it, read it, or
//! stop. The decision is a [`WalkRule`] table that only looks at an
//! element's tag, classes and heading level, so the termination rules can
//! be checked without building a page.

use crate::dom::{Document, NodeId, heading_level};

/// What to do with one sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Move past it.
    Skip,
    /// Hand it to the extractor and keep walking.
    Visit,
    /// Hand it to the extractor and stop.
    Accept,
    /// Stop without handing it over.
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Section heading with a level in the inclusive range.
    Heading(u8, u8),
    /// Element with one of the tags.
    Tag(&'static [&'static str]),
    /// Element with the tag and at least one of the classes.
    Classed(&'static str, &'static [&'static str]),
}

impl Matcher {
    fn matches(&self, tag: &str, classes: &[String]) -> bool {
        match self {
            Matcher::Heading(min, max) => {
                heading_level(tag, classes).is_some_and(|level| (*min..=*max).contains(&level))
            }
            Matcher::Tag(tags) => tags.contains(&tag),
            Matcher::Classed(wanted, names) => {
                tag == *wanted && classes.iter().any(|c| names.contains(&c.as_str()))
            }
        }
    }
}

/// Ordered predicate table; the first matching row decides, anything else
/// is skipped.
#[derive(Debug, Clone, Copy)]
pub struct WalkRule {
    pub name: &'static str,
    rows: &'static [(Matcher, Verdict)],
}

pub const PRONUNCIATION: WalkRule = WalkRule {
    name: "pronunciation",
    rows: &[
        (Matcher::Heading(1, 6), Verdict::Halt),
        (Matcher::Tag(&["ul", "ol", "p"]), Verdict::Accept),
        (
            Matcher::Classed("div", &["mw-collapsible", "vsSwitcher"]),
            Verdict::Halt,
        ),
    ],
};

pub const DEFINITION: WalkRule = WalkRule {
    name: "definition",
    rows: &[
        (Matcher::Heading(3, 5), Verdict::Halt),
        (Matcher::Tag(&["p", "ol", "ul"]), Verdict::Visit),
    ],
};

pub const EXAMPLE_SEEK: WalkRule = WalkRule {
    name: "example",
    rows: &[
        (Matcher::Heading(2, 5), Verdict::Halt),
        (Matcher::Tag(&["ol"]), Verdict::Accept),
    ],
};

impl WalkRule {
    pub fn classify(&self, tag: &str, classes: &[String]) -> Verdict {
        self.rows
            .iter()
            .find(|(matcher, _)| matcher.matches(tag, classes))
            .map_or(Verdict::Skip, |(_, verdict)| *verdict)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Collecting,
    Terminated,
}

impl WalkState {
    /// Next state, and whether the element is handed to the extractor.
    pub fn step(self, verdict: Verdict) -> (WalkState, bool) {
        match (self, verdict) {
            (WalkState::Terminated, _) => (WalkState::Terminated, false),
            (WalkState::Collecting, Verdict::Skip) => (WalkState::Collecting, false),
            (WalkState::Collecting, Verdict::Visit) => (WalkState::Collecting, true),
            (WalkState::Collecting, Verdict::Accept) => (WalkState::Terminated, true),
            (WalkState::Collecting, Verdict::Halt) => (WalkState::Terminated, false),
        }
    }
}

/// Iterator over the element siblings after `start` that `rule` hands over.
pub struct Walk<'a> {
    doc: &'a Document,
    rule: &'a WalkRule,
    cursor: Option<NodeId>,
    state: WalkState,
}

impl<'a> Walk<'a> {
    pub fn new(doc: &'a Document, start: NodeId, rule: &'a WalkRule) -> Self {
        Self {
            doc,
            rule,
            cursor: doc.next_element_sibling(start),
            state: WalkState::Collecting,
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state == WalkState::Collecting {
            let Some(node) = self.cursor else {
                self.state = WalkState::Terminated;
                break;
            };
            self.cursor = self.doc.next_element_sibling(node);

            let tag = self.doc.tag(node).unwrap_or_default();
            let verdict = self.rule.classify(tag, self.doc.classes(node));
            let (state, emit) = self.state.step(verdict);
            self.state = state;

            if verdict != Verdict::Skip {
                tracing::trace!("{} walk: {verdict:?} at <{tag}>", self.rule.name);
            }
            if emit {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pronunciation_rule() {
        let none = classes(&[]);
        assert_eq!(PRONUNCIATION.classify("ul", &none), Verdict::Accept);
        assert_eq!(PRONUNCIATION.classify("p", &none), Verdict::Accept);
        assert_eq!(PRONUNCIATION.classify("h4", &none), Verdict::Halt);
        assert_eq!(PRONUNCIATION.classify("div", &classes(&["vsSwitcher"])), Verdict::Halt);
        assert_eq!(
            PRONUNCIATION.classify("div", &classes(&["NavFrame", "mw-collapsible"])),
            Verdict::Halt
        );
        assert_eq!(PRONUNCIATION.classify("div", &classes(&["thumb"])), Verdict::Skip);
        assert_eq!(PRONUNCIATION.classify("table", &none), Verdict::Skip);
    }

    #[test]
    fn test_definition_rule_stops_at_subsections_only() {
        let none = classes(&[]);
        assert_eq!(DEFINITION.classify("p", &none), Verdict::Visit);
        assert_eq!(DEFINITION.classify("ol", &none), Verdict::Visit);
        assert_eq!(DEFINITION.classify("h3", &none), Verdict::Halt);
        assert_eq!(DEFINITION.classify("h5", &none), Verdict::Halt);
        assert_eq!(DEFINITION.classify("h2", &none), Verdict::Skip);
        assert_eq!(DEFINITION.classify("h6", &none), Verdict::Skip);
        assert_eq!(
            DEFINITION.classify("div", &classes(&["mw-heading", "mw-heading4"])),
            Verdict::Halt
        );
        assert_eq!(DEFINITION.classify("table", &none), Verdict::Skip);
    }

    #[test]
    fn test_example_seek_rule() {
        let none = classes(&[]);
        assert_eq!(EXAMPLE_SEEK.classify("ol", &none), Verdict::Accept);
        assert_eq!(EXAMPLE_SEEK.classify("p", &none), Verdict::Skip);
        assert_eq!(EXAMPLE_SEEK.classify("ul", &none), Verdict::Skip);
        assert_eq!(EXAMPLE_SEEK.classify("h2", &none), Verdict::Halt);
        assert_eq!(EXAMPLE_SEEK.classify("h6", &none), Verdict::Skip);
    }

    #[test]
    fn test_state_machine() {
        let collecting = WalkState::Collecting;
        assert_eq!(collecting.step(Verdict::Skip), (WalkState::Collecting, false));
        assert_eq!(collecting.step(Verdict::Visit), (WalkState::Collecting, true));
        assert_eq!(collecting.step(Verdict::Accept), (WalkState::Terminated, true));
        assert_eq!(collecting.step(Verdict::Halt), (WalkState::Terminated, false));

        let terminated = WalkState::Terminated;
        assert_eq!(terminated.step(Verdict::Visit), (WalkState::Terminated, false));
        assert_eq!(terminated.step(Verdict::Accept), (WalkState::Terminated, false));
    }

    #[test]
    fn test_walk_over_page() {
        let doc = Document::parse(
            "<h4>Noun</h4><p>run</p><div>table</div><ol><li>a</li></ol><h4>Verb</h4><p>after</p>",
        );
        let heading = doc.elements().find(|&id| doc.is_tag(id, "h4")).unwrap();

        let visited: Vec<_> = Walk::new(&doc, heading, &DEFINITION)
            .map(|id| doc.tag(id).unwrap().to_string())
            .collect();
        assert_eq!(visited, vec!["p", "ol"]);

        let mut seek = Walk::new(&doc, heading, &EXAMPLE_SEEK);
        let found = seek.next().unwrap();
        assert!(doc.is_tag(found, "ol"));
        assert_eq!(seek.state(), WalkState::Terminated);
        assert_eq!(seek.next(), None);
    }
}
