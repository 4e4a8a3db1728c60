//! Structured-document extraction
//!
//! The scorer only needs three things from the body markup: the heading outline,
//! the paragraph texts and the plain text. `DocumentExtractor` is the seam; the
//! default `HtmlExtractor` parses the editor's HTML-like rich text with an HTML5
//! parser, so comments, unclosed tags and entities follow browser rules.
//! Malformed markup degrades to less text, never to an error.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// CSS selector strings
const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const PARAGRAPH_SELECTOR_STR: &str = "p";

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HEADING_SELECTOR_STR).expect("Failed to parse heading selector - this is a bug")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PARAGRAPH_SELECTOR_STR)
        .expect("Failed to parse paragraph selector - this is a bug")
});

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Failed to compile blank line regex"));

/// Elements whose boundaries separate words
const BLOCK_ELEMENTS: &[&str] = &[
    "html", "body", "main", "nav", "aside", "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li",
    "ul", "ol", "blockquote", "pre", "section", "article", "header", "footer", "table", "tr", "td",
    "th", "figure", "figcaption", "br", "hr",
];

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Heading from the document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 1..=6
    pub level: u8,
    pub text: String,
}

/// Anything that can pull an outline and paragraphs out of article markup
pub trait DocumentExtractor: Send + Sync {
    /// Headings in document order
    fn extract_headings(&self, markup: &str) -> Vec<Heading>;

    /// Non-empty paragraph texts in document order, whitespace collapsed
    fn extract_paragraphs(&self, markup: &str) -> Vec<String>;

    /// Markup stripped to text, block boundaries kept as blank lines
    fn plain_text(&self, markup: &str) -> String;
}

/// HTML5 extractor for rich text, built on `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl DocumentExtractor for HtmlExtractor {
    fn extract_headings(&self, markup: &str) -> Vec<Heading> {
        let fragment = Html::parse_fragment(markup);

        fragment
            .select(&HEADING_SELECTOR)
            .filter_map(|element| {
                let level = heading_level(element.value().name())?;
                Some(Heading {
                    level,
                    text: inline_text(element),
                })
            })
            .collect()
    }

    fn extract_paragraphs(&self, markup: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(markup);

        let paragraphs: Vec<String> = fragment
            .select(&PARAGRAPH_SELECTOR)
            .map(inline_text)
            .filter(|text| !text.is_empty())
            .collect();
        if !paragraphs.is_empty() {
            return paragraphs;
        }

        // No <p> text: treat blank-line separated text outside headings as paragraphs
        let mut text = String::new();
        push_text(fragment.root_element(), &mut text, true);
        BLANK_LINE_RE
            .split(&text)
            .map(collapse_whitespace)
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn plain_text(&self, markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        let mut text = String::new();
        push_text(fragment.root_element(), &mut text, false);
        text
    }
}

/// Append the visible text under `element`, with blank lines at block boundaries
fn push_text(element: ElementRef<'_>, out: &mut String, skip_headings: bool) {
    let name = element.value().name();
    let block = BLOCK_ELEMENTS.contains(&name);

    if block {
        out.push_str("\n\n");
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let child_name = child.value().name();
            if HIDDEN_ELEMENTS.contains(&child_name) {
                continue;
            }
            if skip_headings && heading_level(child_name).is_some() {
                out.push_str("\n\n");
                continue;
            }
            push_text(child, out, skip_headings);
        }
    }
    if block {
        out.push_str("\n\n");
    }
}

/// `h1`..`h6` to 1..=6
fn heading_level(name: &str) -> Option<u8> {
    let level = name.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Text of an element on a single line
fn inline_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(element, &mut text, false);
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
