//! Target keyword matching
//!
//! Matching is case-insensitive. A single-word keyword matches whole tokens
//! (surrounding punctuation ignored); a multi-word keyword matches as a
//! contiguous phrase with any run of whitespace between its words.
//! Occurrences never overlap.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// Lowercased keyword with whitespace collapsed
    needle: String,
    /// Phrase pattern for multi-word keywords
    phrase: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Self {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        let needle = words.join(" ").to_lowercase();

        let phrase = if words.len() > 1 {
            let body = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join(r"\s+");
            // Word boundaries only where the keyword edge is a word character
            let lead = if starts_with_word_char(&needle) { r"\b" } else { "" };
            let trail = if ends_with_word_char(&needle) { r"\b" } else { "" };
            Regex::new(&format!("(?i){}{}{}", lead, body, trail)).ok()
        } else {
            None
        };

        Self { needle, phrase }
    }

    pub fn keyword(&self) -> &str {
        &self.needle
    }

    pub fn is_single_word(&self) -> bool {
        !self.needle.contains(' ')
    }

    /// Non-overlapping occurrences in `text`
    pub fn count(&self, text: &str) -> usize {
        if self.needle.is_empty() {
            return 0;
        }

        if self.is_single_word() {
            let target = trim_token(&self.needle);
            return text
                .split_whitespace()
                .filter(|token| trim_token(&token.to_lowercase()) == target)
                .count();
        }

        match &self.phrase {
            Some(re) => re.find_iter(text).count(),
            None => normalize(text).matches(self.needle.as_str()).count(),
        }
    }

    pub fn occurs_in(&self, text: &str) -> bool {
        self.count(text) > 0
    }

    /// Case-insensitive substring test, used for titles
    pub fn is_substring_of(&self, text: &str) -> bool {
        !self.needle.is_empty() && normalize(text).contains(self.needle.as_str())
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Strip leading/trailing punctuation, unless that leaves nothing
fn trim_token(token: &str) -> &str {
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        token
    } else {
        trimmed
    }
}

fn starts_with_word_char(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn ends_with_word_char(s: &str) -> bool {
    s.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_matches_whole_tokens() {
        let matcher = KeywordMatcher::new("Rust");
        let text = "Rust is fast. rust, RUST! Trusted rusty crates (rust)";

        assert!(matcher.is_single_word());
        assert_eq!(matcher.count(text), 4);
    }

    #[test]
    fn test_phrase_matches_contiguously_case_insensitive() {
        let matcher = KeywordMatcher::new("content  architecture");
        let text = "Content Architecture matters. Good content\n architecture scales. \
                    Content is not architecture. contentarchitecture";

        assert_eq!(matcher.keyword(), "content architecture");
        assert_eq!(matcher.count(text), 2);
    }

    #[test]
    fn test_phrase_occurrences_do_not_overlap() {
        let matcher = KeywordMatcher::new("la la");
        assert_eq!(matcher.count("la la la la la"), 2);
    }

    #[test]
    fn test_phrase_with_punctuation_edges() {
        let matcher = KeywordMatcher::new("learn c++");
        assert_eq!(matcher.count("Learn C++ today, learn c++ tomorrow"), 2);
    }

    #[test]
    fn test_substring_for_titles() {
        let matcher = KeywordMatcher::new("content architecture");

        assert!(matcher.is_substring_of("The Content   Architecture Guide"));
        assert!(!matcher.is_substring_of("Content Guide"));
        assert!(!matcher.is_substring_of(""));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let matcher = KeywordMatcher::new("   ");
        assert_eq!(matcher.count("anything at all"), 0);
        assert!(!matcher.is_substring_of("anything"));
    }
}
