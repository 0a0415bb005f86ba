pub mod client;
pub mod deepl;
pub mod error;
pub mod google;
pub mod lexicon;

#[cfg(test)]
mod tests;

pub use client::WiktionaryClient;
pub use deepl::DeeplTranslator;
pub use error::LookupError;
pub use google::GoogleTranslator;
pub use lexicon::Lexicon;
