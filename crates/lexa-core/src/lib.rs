pub mod assemble;
pub mod category;
pub mod dom;
pub mod error;
pub mod extract;
pub mod locate;
pub mod resolve;
pub mod section;
pub mod source;
pub mod toc;
pub mod walk;

#[cfg(test)]
mod fixtures;

pub use assemble::{assemble, canonical_word, correlate, display_word};
pub use category::{Category, CategoryKind, PartOfSpeech};
pub use dom::{Consumed, Document};
pub use error::{ExtractError, SectionIndexError, SourceError};
pub use extract::{Extraction, extract};
pub use section::SectionIndex;
pub use source::PageSource;
