//! Report data structures (serializable)

use crate::factors::{FactorId, FactorStatus};
use crate::scorer::Grade;
use serde::{Deserialize, Serialize};

/// Complete explanation for a scored article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub overall: OverallExplanation,
    pub strengths: Vec<FactorCard>,
    pub improvements: Vec<FactorCard>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallExplanation {
    pub score: u8,
    pub stars: String, // "★★★★☆"
    pub grade: Grade,
    pub label: String, // "Excellent" / "Good" / "Needs Work" / "Poor"
    pub message: String,
}

/// One factor, as shown in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorCard {
    pub factor_id: FactorId,
    pub title: String,
    pub status: FactorStatus,
    pub score: f64,
    pub weight: f64,
    /// Points lost against the weight
    pub points_lost: f64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
