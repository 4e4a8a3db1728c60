//! FACTOR 3: CONTENT STRUCTURE
//!
//! Heading outline quality:
//! - exactly one H1
//! - at least one heading containing the keyword
//! - one heading per `words_per_heading` words, but not more than one per
//!   `min_words_per_heading` (over-fragmented)
//!
//! Quality = 0.4 × H1 + 0.3 × keyword heading + 0.3 × heading density.

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{plural, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::ratio_quality;

pub fn evaluate_content_structure(
    article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let keyword = article.target_keyword.trim();
    let rules = &config.headings;
    let h1_count = stats.heading_count(1);
    let heading_count = stats.headings.len();

    let mut findings = Findings::new();

    let h1_quality = match h1_count {
        1 => 1.0,
        0 => {
            findings.issue("No H1 heading found", "Add a single H1 heading that states the topic.");
            0.0
        }
        n => {
            findings.issue(
                format!("Found {} H1 headings, expected exactly one", n),
                "Keep one H1 and demote the others to H2.",
            );
            0.5
        }
    };

    let keyword_quality = if stats.keyword.in_headings > 0 {
        1.0
    } else {
        findings.issue(
            format!("No heading contains the keyword \"{}\"", keyword),
            "Use the keyword in the H1 or at least one subheading.",
        );
        0.0
    };

    let density_quality = if stats.word_count == 0 {
        findings.issue(
            "Article body is empty, so there is no structure to evaluate",
            "Write the body and break it up with headings.",
        );
        0.0
    } else {
        let expected = ((stats.word_count as f64 / rules.words_per_heading).floor() as usize).max(1);
        let ceiling = ((stats.word_count as f64 / rules.min_words_per_heading).floor() as usize).max(1);

        if heading_count < expected {
            findings.issue(
                format!(
                    "{} for {} words, recommended at least {}",
                    plural(heading_count, "heading", "headings"),
                    stats.word_count,
                    expected
                ),
                format!(
                    "Add a subheading roughly every {:.0} words.",
                    rules.words_per_heading
                ),
            );
            ratio_quality(heading_count as f64, expected as f64)
        } else if heading_count > ceiling {
            findings.issue(
                format!(
                    "{} headings for {} words fragments the text",
                    heading_count, stats.word_count
                ),
                "Merge short sections so each heading introduces real content.",
            );
            0.5
        } else {
            1.0
        }
    };

    let quality = 0.4 * h1_quality + 0.3 * keyword_quality + 0.3 * density_quality;
    let pass_message = format!(
        "One H1 and {} for {} words, keyword used in {}",
        plural(heading_count, "heading", "headings"),
        stats.word_count,
        plural(stats.keyword.in_headings, "heading", "headings")
    );

    findings.into_result(FactorId::ContentStructure, config, quality, pass_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::FactorStatus;
    use crate::text::{Heading, KeywordOccurrences};
    use approx::assert_relative_eq;

    fn article() -> ArticleContent {
        ArticleContent {
            target_keyword: "soil health".to_string(),
            ..Default::default()
        }
    }

    fn stats(word_count: usize, levels: &[u8], in_headings: usize) -> TextStats {
        TextStats {
            word_count,
            headings: levels
                .iter()
                .map(|&level| Heading {
                    level,
                    text: format!("Heading {}", level),
                })
                .collect(),
            keyword: KeywordOccurrences {
                in_headings,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_good_outline_passes() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(1000, &[1, 2, 2, 3], 2), &config);

        assert_eq!(result.status, FactorStatus::Pass);
        assert_relative_eq!(result.score, 20.0);
    }

    #[test]
    fn test_single_h1_covers_1000_words() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(1000, &[1], 1), &config);

        assert_eq!(result.status, FactorStatus::Pass);
        assert_relative_eq!(result.score, 20.0);
        assert_eq!(result.message, "One H1 and 1 heading for 1000 words, keyword used in 1 heading");
    }

    #[test]
    fn test_long_article_needs_subheadings() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(3000, &[1], 1), &config);

        assert_eq!(result.status, FactorStatus::Warn);
        assert!(result.message.contains("1 heading for 3000 words, recommended at least 3"));
        assert_relative_eq!(result.score, 20.0 * (0.7 + 0.3 / 3.0), epsilon = 1e-9);
    }

    #[test]
    fn test_missing_h1() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(600, &[2, 2], 1), &config);

        assert_eq!(result.status, FactorStatus::Warn);
        assert_relative_eq!(result.score, 20.0 * 0.6, epsilon = 1e-9);
        assert_eq!(result.message, "No H1 heading found.");
    }

    #[test]
    fn test_multiple_h1_and_sparse_headings() {
        let config = ScoringConfig::default();
        // 5000 words expect 5 headings, only 2 present
        let result = evaluate_content_structure(&article(), &stats(5000, &[1, 1], 0), &config);

        assert_eq!(result.status, FactorStatus::Fail);
        assert!(result.message.contains("Found 2 H1 headings"));
        assert!(result.message.contains("2 headings for 5000 words, recommended at least 5"));
        assert_relative_eq!(result.score, 20.0 * (0.2 + 0.3 * 0.4), epsilon = 1e-9);
    }

    #[test]
    fn test_over_fragmented() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(100, &[1, 2, 2, 2], 1), &config);

        assert_eq!(result.status, FactorStatus::Warn);
        assert!(result.message.contains("fragments the text"));
    }

    #[test]
    fn test_empty_body_fails() {
        let config = ScoringConfig::default();
        let result = evaluate_content_structure(&article(), &stats(0, &[], 0), &config);

        assert_eq!(result.status, FactorStatus::Fail);
        assert_relative_eq!(result.score, 0.0);
    }
}
