//! Factor modules for SEO scoring
//!
//! Each factor is implemented in its own module. Every evaluator is a pure
//! function `(article, stats, config) -> FactorResult` that never fails: missing
//! or out-of-range inputs lower the factor's quality and are named in its message.

pub mod f1_target_keyword;
pub mod f2_meta_elements;
pub mod f3_content_structure;
pub mod f4_readability;
pub mod f5_internal_links;
pub mod f6_images;
pub mod f7_outbound_links;

// Re-export evaluator functions
pub use f1_target_keyword::evaluate_target_keyword;
pub use f2_meta_elements::evaluate_meta_elements;
pub use f3_content_structure::evaluate_content_structure;
pub use f4_readability::evaluate_readability;
pub use f5_internal_links::evaluate_internal_links;
pub use f6_images::evaluate_images;
pub use f7_outbound_links::evaluate_outbound_links;

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::text::TextStats;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The seven scored factors, in weight-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorId {
    TargetKeyword,
    MetaElements,
    ContentStructure,
    Readability,
    InternalLinks,
    Images,
    OutboundLinks,
}

impl FactorId {
    pub const ALL: [FactorId; 7] = [
        FactorId::TargetKeyword,
        FactorId::MetaElements,
        FactorId::ContentStructure,
        FactorId::Readability,
        FactorId::InternalLinks,
        FactorId::Images,
        FactorId::OutboundLinks,
    ];

    /// Identifier as used in configuration and serialized results
    pub fn as_str(self) -> &'static str {
        match self {
            FactorId::TargetKeyword => "targetKeyword",
            FactorId::MetaElements => "metaElements",
            FactorId::ContentStructure => "contentStructure",
            FactorId::Readability => "readability",
            FactorId::InternalLinks => "internalLinks",
            FactorId::Images => "images",
            FactorId::OutboundLinks => "outboundLinks",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            FactorId::TargetKeyword => "Target Keyword",
            FactorId::MetaElements => "Meta Elements",
            FactorId::ContentStructure => "Content Structure",
            FactorId::Readability => "Readability",
            FactorId::InternalLinks => "Internal Links",
            FactorId::Images => "Images",
            FactorId::OutboundLinks => "Outbound Links",
        }
    }

    /// Run this factor's evaluator
    pub fn evaluate(
        self,
        article: &ArticleContent,
        stats: &TextStats,
        config: &ScoringConfig,
    ) -> FactorResult {
        match self {
            FactorId::TargetKeyword => evaluate_target_keyword(article, stats, config),
            FactorId::MetaElements => evaluate_meta_elements(article, stats, config),
            FactorId::ContentStructure => evaluate_content_structure(article, stats, config),
            FactorId::Readability => evaluate_readability(article, stats, config),
            FactorId::InternalLinks => evaluate_internal_links(article, stats, config),
            FactorId::Images => evaluate_images(article, stats, config),
            FactorId::OutboundLinks => evaluate_outbound_links(article, stats, config),
        }
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Pass,
    Warn,
    Fail,
}

impl FactorStatus {
    pub fn label(self) -> &'static str {
        match self {
            FactorStatus::Pass => "Pass",
            FactorStatus::Warn => "Warning",
            FactorStatus::Fail => "Fail",
        }
    }
}

/// Outcome of one factor evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorResult {
    pub factor_id: FactorId,
    pub status: FactorStatus,
    /// Fixed contribution weight toward the 100-point total
    pub weight: f64,
    /// Earned portion, in [0, weight]
    pub score: f64,
    pub message: String,
    /// Suggested fix; absent when the factor passes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl FactorResult {
    /// Points lost against the factor's weight
    pub fn shortfall(&self) -> f64 {
        (self.weight - self.score).max(0.0)
    }
}

/// Classify a quality fraction
///
/// `pass` needs every sub-check to meet its target; otherwise the quality picks
/// between `warn` and `fail`.
pub fn classify(all_targets_met: bool, quality: f64, fail_below: f64) -> FactorStatus {
    if all_targets_met {
        FactorStatus::Pass
    } else if quality < fail_below {
        FactorStatus::Fail
    } else {
        FactorStatus::Warn
    }
}

/// Deficiencies collected by an evaluator, each paired with its fix
#[derive(Debug, Default)]
pub(crate) struct Findings {
    issues: SmallVec<[String; 4]>,
    fixes: SmallVec<[String; 4]>,
}

impl Findings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn issue(&mut self, issue: impl Into<String>, fix: impl Into<String>) {
        self.issues.push(issue.into());
        self.fixes.push(fix.into());
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Build the factor result; `pass_message` is used only when nothing was found
    pub(crate) fn into_result(
        self,
        factor_id: FactorId,
        config: &ScoringConfig,
        quality: f64,
        pass_message: String,
    ) -> FactorResult {
        let weight = config.weights.get(factor_id);
        let quality = if quality.is_finite() {
            quality.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let status = classify(self.is_empty(), quality, config.fail_below);

        let (message, suggestion) = if self.is_empty() {
            (pass_message, None)
        } else {
            (
                format!("{}.", self.issues.join("; ")),
                Some(self.fixes.join(" ")),
            )
        };

        FactorResult {
            factor_id,
            status,
            weight,
            score: weight * quality,
            message,
            suggestion,
        }
    }
}

/// `"1 link"` / `"3 links"`
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Formats `0.5` as `"0.5"` and `120.0` as `"120"`
pub(crate) fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
