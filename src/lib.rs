//! SEO Scorer Rust Implementation
//!
//! Deterministic content scoring for articles against a target keyword.
//!
//! The engine evaluates seven weighted factors, sums their weighted scores into
//! a 0-100 overall score and maps it to a grade band:
//! - `article`: Input model (title, meta, markup body, images, links)
//! - `text/`: Markup extraction, keyword matching, readability statistics
//! - `factors/`: Individual factor evaluators (F1-F7)
//! - `scorer`: Aggregation, grading, parallel and batch scoring
//! - `explanation/`: Human-readable reports (JSON and Markdown)
//! - `live`: Debounced re-scoring for editors
//!
//! ```no_run
//! use seo_scorer::{calculate_seo_score, ArticleContent};
//!
//! let article = ArticleContent {
//!     title: "Composting at home".to_string(),
//!     content: "<h1>Composting at home</h1><p>Composting turns scraps into soil.</p>".to_string(),
//!     target_keyword: "composting".to_string(),
//!     ..Default::default()
//! };
//!
//! if let Some(result) = calculate_seo_score(&article) {
//!     println!("{} ({:?})", result.overall_score, result.grade);
//! }
//! ```

pub mod article;
pub mod config;
pub mod error;
pub mod text;
pub mod utils;
pub mod factors;
pub mod scorer;
pub mod explanation;
pub mod live;

// Re-export commonly used types
pub use article::{ArticleContent, ImageRef, LinkRecord};
pub use config::ScoringConfig;
pub use error::ConfigError;
pub use factors::{FactorId, FactorResult, FactorStatus};
pub use scorer::{calculate_seo_score, Grade, SeoScoreResult, SeoScorer};
pub use explanation::{Explanation, ExplanationGenerator, JsonFormatter, MarkdownFormatter};
pub use live::{DebouncedScorer, ScoreUpdate};
