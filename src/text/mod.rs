//! Text analysis helpers feeding the factor evaluators
//!
//! - `markup`: Heading/paragraph/plain-text extraction behind `DocumentExtractor`
//! - `keyword`: Case-insensitive keyword and phrase matching
//! - `readability`: Sentence segmentation and average lengths
//! - `stats`: `TextStats` assembly

pub mod keyword;
pub mod markup;
pub mod readability;
pub mod stats;

pub use keyword::KeywordMatcher;
pub use markup::{DocumentExtractor, Heading, HtmlExtractor};
pub use readability::{estimate_readability, split_sentences, ParagraphStats, ReadabilityStats};
pub use stats::{KeywordOccurrences, TextStats};
