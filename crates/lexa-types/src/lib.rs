pub mod types;

pub use types::{Definition, Pronunciations, RecordError, WordRecord};
