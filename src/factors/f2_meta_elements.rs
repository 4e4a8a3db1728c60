//! FACTOR 2: META ELEMENTS
//!
//! SEO title length, keyword in the SEO title, and meta description length.
//! Lengths are counted in characters, not bytes.
//!
//! Quality = 0.35 × title length + 0.25 × keyword in title + 0.4 × description length.

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{number, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::band_quality;

pub fn evaluate_meta_elements(
    article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let keyword = article.target_keyword.trim();
    let title_bounds = config.meta_title_length;
    let description_bounds = config.meta_description_length;
    let title_range = format!("{}-{}", number(title_bounds.min), number(title_bounds.max));
    let description_range = format!(
        "{}-{}",
        number(description_bounds.min),
        number(description_bounds.max)
    );

    let seo_title = article.seo_title.trim();
    let title_len = seo_title.chars().count();
    let description = article.seo_description.trim();
    let description_len = description.chars().count();

    let mut findings = Findings::new();

    // SEO title
    let title_quality = band_quality(title_len as f64, title_bounds);
    let keyword_quality = if seo_title.is_empty() {
        findings.issue(
            "SEO title is empty",
            format!(
                "Add an SEO title of {} characters that includes \"{}\".",
                title_range, keyword
            ),
        );
        0.0
    } else {
        if !title_bounds.contains(title_len as f64) {
            let fix = if (title_len as f64) < title_bounds.min {
                "Lengthen the SEO title so it fills the search result line."
            } else {
                "Shorten the SEO title so search engines do not truncate it."
            };
            findings.issue(
                format!(
                    "SEO title is {} characters, recommended {}",
                    title_len, title_range
                ),
                fix,
            );
        }
        if stats.keyword.in_seo_title {
            1.0
        } else {
            findings.issue(
                format!("SEO title does not contain the keyword \"{}\"", keyword),
                "Work the keyword into the SEO title.",
            );
            0.0
        }
    };

    // Meta description
    let description_quality = band_quality(description_len as f64, description_bounds);
    if description.is_empty() {
        findings.issue(
            "Meta description is empty",
            format!(
                "Write a {} character meta description that summarizes the article.",
                description_range
            ),
        );
    } else if !description_bounds.contains(description_len as f64) {
        let fix = if (description_len as f64) < description_bounds.min {
            "Expand the meta description with a clear benefit for the reader."
        } else {
            "Trim the meta description so it is not cut off in search results."
        };
        findings.issue(
            format!(
                "Meta description is {} characters, recommended {}",
                description_len, description_range
            ),
            fix,
        );
    }

    let quality = 0.35 * title_quality + 0.25 * keyword_quality + 0.4 * description_quality;
    let pass_message = format!(
        "SEO title ({} characters) contains the keyword and meta description is {} characters",
        title_len, description_len
    );

    findings.into_result(FactorId::MetaElements, config, quality, pass_message)
}
