//! SEO Scorer - Main coordinator for scoring articles
//!
//! This module runs all 7 factor evaluators, aggregates their weighted scores
//! and assigns the grade band. Includes sequential, parallel (Rayon) and batch
//! implementations; all three produce identical results for the same input.

use crate::article::ArticleContent;
use crate::config::{GradeThresholds, ScoringConfig};
use crate::error::ConfigError;
use crate::factors::{FactorId, FactorResult};
use crate::text::{DocumentExtractor, HtmlExtractor, KeywordMatcher, TextStats};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DEFAULT_SCORER: LazyLock<SeoScorer> = LazyLock::new(SeoScorer::default);

/// Coarse grade band derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grade {
    Excellent,
    Good,
    NeedsWork,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8, thresholds: &GradeThresholds) -> Self {
        match score {
            s if s >= thresholds.excellent => Grade::Excellent,
            s if s >= thresholds.good => Grade::Good,
            s if s >= thresholds.needs_work => Grade::NeedsWork,
            _ => Grade::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::NeedsWork => "Needs Work",
            Grade::Poor => "Poor",
        }
    }
}

/// SEO score result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScoreResult {
    /// 0-100
    pub overall_score: u8,
    pub grade: Grade,
    /// One entry per factor, in weight-table order
    pub factors: Vec<FactorResult>,
}

impl SeoScoreResult {
    pub fn factor(&self, id: FactorId) -> Option<&FactorResult> {
        self.factors.iter().find(|f| f.factor_id == id)
    }
}

/// Combine factor results into the overall score and grade
pub fn aggregate(factors: Vec<FactorResult>, thresholds: &GradeThresholds) -> SeoScoreResult {
    let total: f64 = factors.iter().map(|f| f.score).sum();
    let overall_score = if total.is_finite() {
        total.round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    SeoScoreResult {
        overall_score,
        grade: Grade::from_score(overall_score, thresholds),
        factors,
    }
}

/// Main SEO scorer
///
/// Holds a validated configuration and the markup extractor. Scoring is pure,
/// so one scorer can be shared by reference across threads.
pub struct SeoScorer {
    config: ScoringConfig,
    extractor: Box<dyn DocumentExtractor>,
}

impl Default for SeoScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            extractor: Box::new(HtmlExtractor),
        }
    }
}

impl std::fmt::Debug for SeoScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeoScorer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SeoScorer {
    /// Build a scorer, rejecting an invalid configuration up front
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            extractor: Box::new(HtmlExtractor),
        })
    }

    /// Replace the markup extractor
    pub fn with_extractor(mut self, extractor: impl DocumentExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Text statistics for the article, or `None` without a keyword
    pub fn text_stats(&self, article: &ArticleContent) -> Option<TextStats> {
        let keyword = article.keyword()?;
        let matcher = KeywordMatcher::new(keyword);
        Some(TextStats::extract(article, &matcher, self.extractor.as_ref()))
    }

    /// Score an article using all 7 factors
    ///
    /// Returns `None` when the target keyword is empty or whitespace: without a
    /// keyword there is nothing to score against, which is different from a
    /// score of 0.
    pub fn score(&self, article: &ArticleContent) -> Option<SeoScoreResult> {
        let stats = self.text_stats(article)?;

        let factors: Vec<FactorResult> = FactorId::ALL
            .iter()
            .map(|factor| factor.evaluate(article, &stats, &self.config))
            .collect();

        Some(self.finish(factors, &stats))
    }

    /// Score an article using all 7 factors IN PARALLEL
    ///
    /// Factors are evaluated on the Rayon pool; collection keeps weight-table
    /// order, so the result equals `score`.
    pub fn score_parallel(&self, article: &ArticleContent) -> Option<SeoScoreResult> {
        let stats = self.text_stats(article)?;

        let factors: Vec<FactorResult> = FactorId::ALL
            .as_slice()
            .par_iter()
            .map(|factor| factor.evaluate(article, &stats, &self.config))
            .collect();

        Some(self.finish(factors, &stats))
    }

    /// Score many articles in parallel, preserving input order
    pub fn score_batch(&self, articles: &[ArticleContent]) -> Vec<Option<SeoScoreResult>> {
        articles.par_iter().map(|article| self.score(article)).collect()
    }

    fn finish(&self, factors: Vec<FactorResult>, stats: &TextStats) -> SeoScoreResult {
        let result = aggregate(factors, &self.config.grade_thresholds);
        tracing::debug!(
            "Scored article: {} words, keyword density {:.2}%, overall {} ({:?})",
            stats.word_count,
            stats.keyword_density_percent(),
            result.overall_score,
            result.grade
        );
        result
    }
}

/// Score an article with the default configuration
///
/// Returns `None` when the target keyword is empty or whitespace-only.
pub fn calculate_seo_score(article: &ArticleContent) -> Option<SeoScoreResult> {
    DEFAULT_SCORER.score(article)
}
