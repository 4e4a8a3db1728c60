//! Builds an `Explanation` from a score result

use crate::explanation::types::*;
use crate::factors::{FactorResult, FactorStatus};
use crate::scorer::{Grade, SeoScoreResult};

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate a report from a score result
    ///
    /// Strengths keep factor order. Improvements are ordered by points lost,
    /// largest first; ties keep factor order.
    pub fn generate(result: &SeoScoreResult) -> Explanation {
        let overall = Self::generate_overall(result);

        let strengths: Vec<FactorCard> = result
            .factors
            .iter()
            .filter(|f| f.status == FactorStatus::Pass)
            .map(Self::card)
            .collect();

        let mut improvements: Vec<FactorCard> = result
            .factors
            .iter()
            .filter(|f| f.status != FactorStatus::Pass)
            .map(Self::card)
            .collect();
        // Stable sort keeps factor order among equal losses
        improvements.sort_by(|a, b| b.points_lost.total_cmp(&a.points_lost));

        Explanation {
            overall,
            strengths,
            improvements,
        }
    }

    fn generate_overall(result: &SeoScoreResult) -> OverallExplanation {
        let score = result.overall_score;
        let filled = ((score as f64 / 20.0).round() as usize).min(5);
        let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));

        let message = match result.grade {
            Grade::Excellent => "Well optimized for search. Keep the content fresh.",
            Grade::Good => "Solid SEO foundation with a few gaps to close.",
            Grade::NeedsWork => "Several factors need attention before publishing.",
            Grade::Poor => "Major SEO problems. Start with the largest improvements below.",
        };

        OverallExplanation {
            score,
            stars,
            grade: result.grade,
            label: result.grade.label().to_string(),
            message: format!("SEO score {}/100. {}", score, message),
        }
    }

    fn card(factor: &FactorResult) -> FactorCard {
        FactorCard {
            factor_id: factor.factor_id,
            title: factor.factor_id.label().to_string(),
            status: factor.status,
            score: factor.score,
            weight: factor.weight,
            points_lost: factor.shortfall(),
            message: factor.message.clone(),
            suggestion: factor.suggestion.clone(),
        }
    }
}
