//! FACTOR 4: READABILITY
//!
//! Average paragraph length and average sentence length, each scored against
//! its configured band (equal halves of the factor).

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{number, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::band_quality;

pub fn evaluate_readability(
    _article: &ArticleContent,
    stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let rules = &config.readability;
    let readability = &stats.readability;
    let mut findings = Findings::new();

    if stats.word_count == 0 || stats.paragraphs.is_empty() || readability.sentence_count == 0 {
        findings.issue(
            "No readable paragraph text found",
            "Write the body as paragraphs of complete sentences.",
        );
        return findings.into_result(FactorId::Readability, config, 0.0, String::new());
    }

    let paragraph_words = readability.average_paragraph_words;
    let sentence_words = readability.average_sentence_words;

    if !rules.paragraph_words.contains(paragraph_words) {
        let fix = if paragraph_words > rules.paragraph_words.max {
            "Split long paragraphs into smaller ones."
        } else {
            "Combine or expand very short paragraphs."
        };
        findings.issue(
            format!(
                "Paragraphs average {:.0} words, recommended {}-{}",
                paragraph_words,
                number(rules.paragraph_words.min),
                number(rules.paragraph_words.max)
            ),
            fix,
        );
    }

    if !rules.sentence_words.contains(sentence_words) {
        let fix = if sentence_words > rules.sentence_words.max {
            "Break long sentences apart."
        } else {
            "Join choppy sentences so ideas flow."
        };
        findings.issue(
            format!(
                "Sentences average {:.1} words, recommended {}-{}",
                sentence_words,
                number(rules.sentence_words.min),
                number(rules.sentence_words.max)
            ),
            fix,
        );
    }

    let quality = 0.5 * band_quality(paragraph_words, rules.paragraph_words)
        + 0.5 * band_quality(sentence_words, rules.sentence_words);
    let pass_message = format!(
        "Paragraphs average {:.0} words and sentences average {:.1} words",
        paragraph_words, sentence_words
    );

    findings.into_result(FactorId::Readability, config, quality, pass_message)
}
