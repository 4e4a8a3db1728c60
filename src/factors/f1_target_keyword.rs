//! FACTOR 1: TARGET KEYWORD USAGE
//!
//! Checks that the keyword appears in the title, in the first paragraph and
//! at a natural density in the body.
//!
//! Quality = 0.25 × in title + 0.25 × in first paragraph + 0.5 × density quality.
//! Stuffing (density at or above the stuffing threshold) zeroes the factor.

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{number, plural, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::density_quality;

pub fn evaluate_target_keyword(
    article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let keyword = article.target_keyword.trim();
    let bands = &config.keyword_density;
    let occurrences = stats.keyword.occurrences;
    let percent = stats.keyword_density_percent();
    let band_text = format!("{}-{}%", number(bands.min_percent), number(bands.max_percent));

    let mut findings = Findings::new();
    let mut stuffed = false;

    if stats.word_count == 0 {
        findings.issue(
            format!("Article body is empty, so \"{}\" cannot be measured", keyword),
            "Write the article body and use the keyword naturally throughout.",
        );
    } else if occurrences == 0 {
        findings.issue(
            format!("Keyword \"{}\" does not appear in the body", keyword),
            format!("Use the keyword at a {} density.", band_text),
        );
    } else if percent >= bands.stuffing_percent {
        stuffed = true;
        findings.issue(
            format!(
                "Keyword stuffing: \"{}\" is used {} ({:.1}% density), above the {}% limit",
                keyword,
                plural(occurrences, "time", "times"),
                percent,
                number(bands.stuffing_percent)
            ),
            format!(
                "Replace repetitions with synonyms until density is within {}.",
                band_text
            ),
        );
    } else if percent < bands.min_percent {
        findings.issue(
            format!(
                "Keyword density is {:.2}% ({}), below the recommended {}",
                percent,
                plural(occurrences, "use", "uses"),
                band_text
            ),
            "Mention the keyword a few more times where it reads naturally.",
        );
    } else if percent > bands.max_percent {
        findings.issue(
            format!(
                "Keyword density is {:.1}%, above the recommended {}",
                percent, band_text
            ),
            "Use the keyword less often and vary the wording.",
        );
    }

    if !stats.keyword.in_title {
        findings.issue(
            "Keyword does not appear in the title or SEO title",
            "Include the keyword in the title, ideally near the start.",
        );
    }
    if !stats.keyword.in_first_paragraph {
        findings.issue(
            "Keyword does not appear in the first paragraph",
            "Introduce the keyword in the opening paragraph.",
        );
    }

    let quality = if stuffed {
        0.0
    } else {
        let title = if stats.keyword.in_title { 1.0 } else { 0.0 };
        let opening = if stats.keyword.in_first_paragraph { 1.0 } else { 0.0 };
        0.25 * title + 0.25 * opening + 0.5 * density_quality(percent, bands)
    };

    let pass_message = format!(
        "Keyword \"{}\" appears in the title and first paragraph with {:.1}% density ({})",
        keyword,
        percent,
        plural(occurrences, "use", "uses")
    );

    findings.into_result(FactorId::TargetKeyword, config, quality, pass_message)
}
