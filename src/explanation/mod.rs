//! Human-readable reports built from a score result

pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{Explanation, FactorCard, OverallExplanation};
pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
