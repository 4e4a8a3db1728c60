//! Output formats for explanations

pub mod markdown;
pub mod json;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
