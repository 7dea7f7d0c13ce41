//! HTML article extraction
//!
//! Two strategies over the same fetched page: a structured parse that walks
//! a priority list of article selectors, and a boilerplate-removal fallback
//! that keeps paragraph text and drops page chrome.

use scraper::{ElementRef, Html, Selector};

use crate::text::clean_text;

/// Minimum word count for a primary extraction to be considered usable
pub const MIN_ARTICLE_WORDS: usize = 20;

/// Structured article extraction.
///
/// Tries semantic containers in priority order and returns the first one
/// with substantial text. Returns an empty string when no selector
/// matches; the caller decides whether to fall back.
pub fn extract_article(html: &str) -> String {
    let document = Html::parse_document(html);

    // Priority order of selectors to try
    let selectors = [
        "article",
        "main",
        "[role='main']",
        ".post-content",
        ".article-content",
        ".entry-content",
        ".story-body",
        ".article__body",
        ".content-body",
        "#article-body",
        "#content",
    ];

    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = clean_text(&element_text(&element));
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    String::new()
}

/// Boilerplate-removal fallback.
///
/// Collects paragraph text from the whole document, which sheds nav bars,
/// link lists and footer chrome that a whole-body dump would keep. Falls
/// back to the full body text on paragraph-free pages.
pub fn strip_boilerplate(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("p") {
        let paragraphs: Vec<String> = document
            .select(&selector)
            .map(|p| element_text(&p))
            .collect();
        let text = clean_text(&paragraphs.join(" "));
        if !text.is_empty() {
            return text;
        }
    }

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            return clean_text(&element_text(&body));
        }
    }

    String::new()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
