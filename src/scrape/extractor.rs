// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML content extraction
//!
//! Pulls the primary textual content out of a result page and collects
//! every image URL present in the document.

use scraper::{ElementRef, Html, Selector};

/// Content regions tried in order before falling back to `<body>`
const CONTENT_SELECTORS: [&str; 4] = ["main", "article", ".content", ".post"];

/// Noise elements whose text is never extracted
const SKIP_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Extract the primary text content from a page
///
/// Prefers a designated main/article region; falls back to the full body
/// with scripts, styles, navigation, headers and footers stripped.
pub fn extract_page_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = clean_text(&collect_text(element));
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            return clean_text(&collect_text(body));
        }
    }

    String::new()
}

/// Collect all `<img src>` URLs in document order
pub fn collect_image_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recursively gather text, skipping noise elements
fn collect_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text_into(element, &mut out);
    out
}

fn collect_text_into(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !SKIP_TAGS.contains(&child_el.value().name()) {
                collect_text_into(child_el, out);
            }
        }
    }
}

/// Normalize whitespace
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
