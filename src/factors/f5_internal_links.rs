//! FACTOR 5: INTERNAL LINKS
//!
//! Internal link count against a per-1000-words target (at least one link).

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{number, plural, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::{ratio_quality, required_count};

pub fn evaluate_internal_links(
    article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let per_1000 = config.link_ratios.internal_per_1000_words;
    let count = article.internal_links.len();
    let mut findings = Findings::new();

    if stats.word_count == 0 {
        findings.issue(
            "Article body is empty, so the internal link ratio cannot be met",
            "Write the body and link to related pages on your site.",
        );
        return findings.into_result(FactorId::InternalLinks, config, 0.0, String::new());
    }

    let required = required_count(stats.word_count, per_1000 / 1000.0);
    if count < required {
        findings.issue(
            format!(
                "{} for {} words, recommended at least {} ({} per 1000 words)",
                plural(count, "internal link", "internal links"),
                stats.word_count,
                required,
                number(per_1000)
            ),
            "Link to related articles or product pages on your own site.",
        );
    }

    let quality = ratio_quality(count as f64, required as f64);
    let pass_message = format!(
        "{} for {} words (target {})",
        plural(count, "internal link", "internal links"),
        stats.word_count,
        required
    );

    findings.into_result(FactorId::InternalLinks, config, quality, pass_message)
}
