//! Text statistics for one article
//!
//! Everything the factor evaluators read about the body is computed here once,
//! so the evaluators stay free of parsing and matching.

use crate::article::ArticleContent;
use crate::text::keyword::KeywordMatcher;
use crate::text::markup::{DocumentExtractor, Heading};
use crate::text::readability::{estimate_readability, paragraph_stats, ParagraphStats, ReadabilityStats};
use serde::{Deserialize, Serialize};

/// Where and how often the target keyword occurs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordOccurrences {
    /// Substring of `title` or `seo_title`
    pub in_title: bool,
    /// Substring of `seo_title` alone
    pub in_seo_title: bool,
    pub in_first_paragraph: bool,
    /// Number of headings containing the keyword
    pub in_headings: usize,
    /// Non-overlapping occurrences in the body text
    pub occurrences: usize,
    /// occurrences / word_count (0.0 for an empty body)
    pub density: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub paragraphs: Vec<ParagraphStats>,
    pub headings: Vec<Heading>,
    pub keyword: KeywordOccurrences,
    pub readability: ReadabilityStats,
}

impl TextStats {
    /// Extract statistics for `article` against the given keyword
    pub fn extract(
        article: &ArticleContent,
        keyword: &KeywordMatcher,
        extractor: &dyn DocumentExtractor,
    ) -> Self {
        let plain = extractor.plain_text(&article.content);
        let word_count = plain.split_whitespace().count();

        let headings = extractor.extract_headings(&article.content);
        let paragraphs: Vec<ParagraphStats> = extractor
            .extract_paragraphs(&article.content)
            .iter()
            .map(|text| paragraph_stats(text))
            .collect();
        let readability = estimate_readability(&paragraphs);

        let occurrences = if word_count > 0 { keyword.count(&plain) } else { 0 };
        let density = if word_count > 0 {
            occurrences as f64 / word_count as f64
        } else {
            0.0
        };

        let in_seo_title = keyword.is_substring_of(&article.seo_title);
        let keyword_stats = KeywordOccurrences {
            in_title: in_seo_title || keyword.is_substring_of(&article.title),
            in_seo_title,
            in_first_paragraph: paragraphs
                .first()
                .is_some_and(|p| keyword.occurs_in(&p.text)),
            in_headings: headings.iter().filter(|h| keyword.occurs_in(&h.text)).count(),
            occurrences,
            density,
        };

        Self {
            word_count,
            paragraphs,
            headings,
            keyword: keyword_stats,
            readability,
        }
    }

    /// Keyword density in percent, computed from counts to avoid rounding drift
    pub fn keyword_density_percent(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.keyword.occurrences as f64 * 100.0 / self.word_count as f64
        }
    }

    pub fn heading_count(&self, level: u8) -> usize {
        self.headings.iter().filter(|h| h.level == level).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::markup::HtmlExtractor;
    use approx::assert_relative_eq;

    fn stats_for(content: &str, keyword: &str) -> TextStats {
        let article = ArticleContent {
            title: "A Guide to Garden Design".to_string(),
            content: content.to_string(),
            target_keyword: keyword.to_string(),
            ..Default::default()
        };
        TextStats::extract(&article, &KeywordMatcher::new(keyword), &HtmlExtractor)
    }

    #[test]
    fn test_basic_stats() {
        let stats = stats_for(
            "<h1>Garden Design Basics</h1>\
             <p>Garden design starts with light. Then soil.</p>\
             <h2>Planting</h2><p>Plant in layers for structure.</p>",
            "garden design",
        );

        assert_eq!(stats.word_count, 16);
        assert_eq!(stats.headings.len(), 2);
        assert_eq!(stats.heading_count(1), 1);
        assert_eq!(stats.paragraphs.len(), 2);
        assert_eq!(stats.paragraphs[0].word_count, 7);
        assert_eq!(stats.readability.sentence_count, 3);

        assert!(stats.keyword.in_title);
        assert!(!stats.keyword.in_seo_title);
        assert!(stats.keyword.in_first_paragraph);
        assert_eq!(stats.keyword.in_headings, 1);
        assert_eq!(stats.keyword.occurrences, 2);
        assert_relative_eq!(stats.keyword.density, 2.0 / 16.0, epsilon = 1e-12);
        assert_relative_eq!(stats.keyword_density_percent(), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn test_keyword_missing_from_first_paragraph() {
        let stats = stats_for("<p>Light first.</p><p>Garden design later.</p>", "garden design");

        assert!(!stats.keyword.in_first_paragraph);
        assert_eq!(stats.keyword.occurrences, 1);
    }

    #[test]
    fn test_unclosed_first_paragraph_does_not_absorb_the_next() {
        let stats = stats_for(
            "<p>Light first.<p>Garden design later.</p>",
            "garden design",
        );

        assert_eq!(stats.paragraphs.len(), 2);
        assert!(!stats.keyword.in_first_paragraph);
    }

    #[test]
    fn test_commented_heading_not_counted() {
        let stats = stats_for(
            "<!-- <h1>Garden design draft</h1> --><h1>Garden Design Basics</h1><p>Body.</p>",
            "garden design",
        );

        assert_eq!(stats.heading_count(1), 1);
        assert_eq!(stats.keyword.in_headings, 1);
        assert_eq!(stats.keyword.occurrences, 1);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_empty_content_yields_empty_stats() {
        let stats = stats_for("", "garden design");

        assert_eq!(stats.word_count, 0);
        assert!(stats.paragraphs.is_empty());
        assert!(stats.headings.is_empty());
        assert_eq!(stats.keyword.occurrences, 0);
        assert_relative_eq!(stats.keyword.density, 0.0);
        assert_relative_eq!(stats.keyword_density_percent(), 0.0);
        assert_eq!(stats.readability, ReadabilityStats::default());
    }
}
