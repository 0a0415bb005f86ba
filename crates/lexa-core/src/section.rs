use std::fmt;
use std::str::FromStr;

use crate::error::SectionIndexError;

/// Dotted position of a heading in the page outline, e.g. `2.1.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionIndex {
    parts: Vec<u32>,
}

impl SectionIndex {
    /// Index used for every section of a page without a table of contents.
    pub fn synthetic() -> Self {
        Self { parts: vec![1] }
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// True when `other` lies strictly below `self` in the outline.
    ///
    /// Compares whole components, so `2.1` is an ancestor of `2.1.3` but
    /// not of `2.10`.
    pub fn is_ancestor_of(&self, other: &SectionIndex) -> bool {
        other.parts.len() > self.parts.len() && other.parts.starts_with(&self.parts)
    }

    /// True when `other` is `self` or lies below it.
    pub fn contains(&self, other: &SectionIndex) -> bool {
        self == other || self.is_ancestor_of(other)
    }
}

impl FromStr for SectionIndex {
    type Err = SectionIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SectionIndexError::Empty);
        }

        let parts = trimmed
            .split('.')
            .map(|component| {
                component
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0 && component.bytes().all(|b| b.is_ascii_digit()))
                    .ok_or_else(|| SectionIndexError::InvalidComponent {
                        index: trimmed.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parts })
    }
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
