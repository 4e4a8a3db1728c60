//! Shared article fixtures for integration tests
#![allow(dead_code)]

use seo_scorer::{ArticleContent, ImageRef, LinkRecord};

pub const KEYWORD: &str = "content architecture";

/// 9 words, one keyword use
pub const KEY_SENTENCE: &str = "Solid content architecture keeps every section easy to find.";
/// 10 words, one keyword use
pub const KEY_SENTENCE_10: &str = "Good content architecture keeps every section easy to find fast.";
/// 10 words, no keyword
pub const FILLER: &str = "Teams plan each page around clear goals for curious readers.";

pub const SEO_TITLE: &str = "Content Architecture Guide: Plan Pages Readers Can Find";
pub const SEO_DESCRIPTION: &str = "Learn how content architecture organizes pages, topics and \
internal links so readers and search engines can find exactly what they need now.";

pub fn paragraph(lead: Option<&str>, fillers: usize) -> String {
    let mut sentences: Vec<&str> = lead.into_iter().collect();
    sentences.extend(std::iter::repeat(FILLER).take(fillers));
    format!("<p>{}</p>", sentences.join(" "))
}

pub fn links(count: usize, prefix: &str) -> Vec<LinkRecord> {
    (0..count)
        .map(|i| LinkRecord::new(format!("{}{}", prefix, i), "related reading"))
        .collect()
}

pub fn images(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("Content architecture diagram {}", i)))
        .collect()
}

/// 1000 words, 4 headings, 10 paragraphs, 5 keyword uses (0.5% density)
pub fn well_optimized_body() -> String {
    let mut body = String::new();
    body.push_str("<h1>Content Architecture Guide</h1>");
    body.push_str(&paragraph(Some(KEY_SENTENCE), 9));
    body.push_str("<h2>Planning your content architecture</h2>");
    body.push_str(&paragraph(None, 10));
    body.push_str(&paragraph(Some(KEY_SENTENCE), 9));
    body.push_str("<h2>Measuring results</h2>");
    body.push_str(&paragraph(Some(KEY_SENTENCE), 9));
    body.push_str("<h2>Next steps for teams</h2>");
    for _ in 0..5 {
        body.push_str(&paragraph(None, 10));
    }
    body.push_str(&paragraph(None, 9));
    body
}

pub fn well_optimized_article() -> ArticleContent {
    ArticleContent {
        title: "Content Architecture Guide".to_string(),
        seo_title: SEO_TITLE.to_string(),
        seo_description: SEO_DESCRIPTION.to_string(),
        content: well_optimized_body(),
        target_keyword: KEYWORD.to_string(),
        images: images(3),
        internal_links: links(3, "/guides/"),
        outbound_links: links(2, "https://example.org/research/"),
    }
}

/// 1000 words of paragraphs (no headings) with `uses` keyword sentences first
pub fn body_with_keyword_uses(uses: usize) -> String {
    let sentences: Vec<&str> = (0..100)
        .map(|i| if i < uses { KEY_SENTENCE_10 } else { FILLER })
        .collect();
    sentences
        .chunks(10)
        .map(|chunk| format!("<p>{}</p>", chunk.join(" ")))
        .collect()
}

/// 1000 words with the keyword phrase repeated 80 times (8% density)
pub fn stuffed_body() -> String {
    let mut body = String::from("<p>");
    body.push_str(&vec![KEYWORD; 80].join(" "));
    body.push_str(".</p>");
    for chunk in vec![FILLER; 84].chunks(12) {
        body.push_str(&format!("<p>{}</p>", chunk.join(" ")));
    }
    body
}
