//! FACTOR 6: IMAGES
//!
//! Image count against a words-per-image target, plus alt text coverage.
//!
//! Quality = 0.6 × count ratio + 0.4 × share of images with alt text.

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{number, plural, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::{ratio_quality, required_count};

pub fn evaluate_images(
    article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let words_per_image = config.link_ratios.words_per_image;
    let count = article.images.len();
    let with_alt = article.images.iter().filter(|img| img.has_alt_text()).count();
    let mut findings = Findings::new();

    if stats.word_count == 0 {
        findings.issue(
            "Article body is empty, so the image ratio cannot be met",
            "Write the body and illustrate it with images.",
        );
        return findings.into_result(FactorId::Images, config, 0.0, String::new());
    }

    let required = required_count(stats.word_count, 1.0 / words_per_image);
    if count < required {
        findings.issue(
            format!(
                "{} for {} words, recommended at least {} (1 per {} words)",
                plural(count, "image", "images"),
                stats.word_count,
                required,
                number(words_per_image)
            ),
            "Add diagrams, screenshots or photos that support the text.",
        );
    }

    let missing_alt = count - with_alt;
    if missing_alt > 0 {
        findings.issue(
            format!("{} of {} missing alt text", missing_alt, plural(count, "image is", "images are")),
            "Describe every image in its alt text, using the keyword where it fits.",
        );
    }

    let alt_quality = if count == 0 {
        0.0
    } else {
        with_alt as f64 / count as f64
    };
    let quality = 0.6 * ratio_quality(count as f64, required as f64) + 0.4 * alt_quality;
    let pass_message = format!(
        "{} for {} words, all with alt text",
        plural(count, "image", "images"),
        stats.word_count
    );

    findings.into_result(FactorId::Images, config, quality, pass_message)
}
