//! Readability estimation
//!
//! Sentence segmentation is deliberately simple: a sentence ends at a run of
//! `.`, `!` or `?` followed by whitespace or the end of the paragraph, so
//! decimals like `3.5` stay intact. Text without terminal punctuation still
//! counts as one sentence.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("Failed to compile sentence regex"));

/// Per-paragraph statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStats {
    pub text: String,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Aggregate readability figures over all paragraphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityStats {
    pub sentence_count: usize,
    /// 0.0 when there are no sentences
    pub average_sentence_words: f64,
    /// 0.0 when there are no paragraphs
    pub average_paragraph_words: f64,
}

/// Split paragraph text into sentences that contain at least one word
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| s.split_whitespace().next().is_some())
        .collect()
}

pub fn paragraph_stats(text: &str) -> ParagraphStats {
    ParagraphStats {
        text: text.to_string(),
        word_count: text.split_whitespace().count(),
        sentence_count: split_sentences(text).len(),
    }
}

pub fn estimate_readability(paragraphs: &[ParagraphStats]) -> ReadabilityStats {
    if paragraphs.is_empty() {
        return ReadabilityStats::default();
    }

    let total_words: usize = paragraphs.iter().map(|p| p.word_count).sum();
    let sentence_count: usize = paragraphs.iter().map(|p| p.sentence_count).sum();

    let average_sentence_words = if sentence_count > 0 {
        total_words as f64 / sentence_count as f64
    } else {
        0.0
    };

    ReadabilityStats {
        sentence_count,
        average_sentence_words,
        average_paragraph_words: total_words as f64 / paragraphs.len() as f64,
    }
}
