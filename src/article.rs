//! Article input model
//!
//! The caller hands the scorer one `ArticleContent` per evaluation. Nothing here
//! is persisted; the scorer only borrows it.

use serde::{Deserialize, Serialize};

/// Image embedded in the article body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    #[serde(default)]
    pub alt_text: String,
}

impl ImageRef {
    pub fn new(alt_text: impl Into<String>) -> Self {
        Self { alt_text: alt_text.into() }
    }

    pub fn has_alt_text(&self) -> bool {
        !self.alt_text.trim().is_empty()
    }
}

/// Internal or outbound link record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anchor_text: String,
}

impl LinkRecord {
    pub fn new(url: impl Into<String>, anchor_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anchor_text: anchor_text.into(),
        }
    }
}

/// Article state as edited by the author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleContent {
    /// Display title
    pub title: String,
    /// `<title>` tag content
    pub seo_title: String,
    /// Meta description content
    pub seo_description: String,
    /// Body markup (HTML-like rich text)
    pub content: String,
    /// Keyword or phrase the article is optimized for
    pub target_keyword: String,
    pub images: Vec<ImageRef>,
    pub internal_links: Vec<LinkRecord>,
    pub outbound_links: Vec<LinkRecord>,
}

impl ArticleContent {
    /// Trimmed target keyword, or `None` when there is nothing to score against
    pub fn keyword(&self) -> Option<&str> {
        let keyword = self.target_keyword.trim();
        if keyword.is_empty() {
            None
        } else {
            Some(keyword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_whitespace_is_absent() {
        let article = ArticleContent {
            target_keyword: " \t\n ".to_string(),
            ..Default::default()
        };
        assert_eq!(article.keyword(), None);
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let article = ArticleContent {
            target_keyword: "  content architecture ".to_string(),
            ..Default::default()
        };
        assert_eq!(article.keyword(), Some("content architecture"));
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let json = r#"{
            "title": "Guide",
            "seoTitle": "Guide | Site",
            "targetKeyword": "guide",
            "images": [{ "altText": "diagram" }, {}]
        }"#;
        let article: ArticleContent = serde_json::from_str(json).unwrap();

        assert_eq!(article.seo_title, "Guide | Site");
        assert!(article.seo_description.is_empty());
        assert_eq!(article.images.len(), 2);
        assert!(article.images[0].has_alt_text());
        assert!(!article.images[1].has_alt_text());
        assert!(article.outbound_links.is_empty());
    }
}
