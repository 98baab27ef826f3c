//! Training corpus parsing.
//!
//! A corpus is a markdown document of example sentences grouped by intent
//! and language. [`CorpusParser`] turns it into a [`ParsedDocument`] ready
//! for upload to the NLU / LM admin services.

pub mod annotation;
pub mod corpus;
pub mod types;

pub use annotation::{tokenize, Annotated};
pub use corpus::CorpusParser;
pub use types::{EntitySpan, ParsedDocument, Sentence, APP_PREFIX};
