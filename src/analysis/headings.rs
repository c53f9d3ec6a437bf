//! Heading extraction for both dialects

use super::format::DocumentFormat;
use super::lines::{classify, LineKind};
use super::text::{html_text, slugify, strip_inline_markdown};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTML_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());

/// One heading of the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingItem {
    pub level: u8,
    pub text: String,
    pub id: String,
}

impl HeadingItem {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let id = slugify(&text);
        Self { level, text, id }
    }
}

/// Headings up to `max_depth` (clamped to 1..=6), in document order.
pub fn extract_headings(content: &str, format: DocumentFormat, max_depth: u8) -> Vec<HeadingItem> {
    let max_depth = max_depth.clamp(1, 6);
    let raw = match format {
        DocumentFormat::Html => html_headings(content),
        DocumentFormat::Markdown => markdown_headings(content),
    };
    raw.into_iter()
        .filter(|(level, text)| *level <= max_depth && !text.is_empty())
        .map(|(level, text)| HeadingItem::new(level, text))
        .collect()
}

pub(crate) fn markdown_headings(content: &str) -> Vec<(u8, String)> {
    classify(content)
        .into_iter()
        .filter_map(|line| match line.kind {
            LineKind::Heading { level, text } => Some((level, strip_inline_markdown(text))),
            _ => None,
        })
        .collect()
}

pub(crate) fn html_headings(content: &str) -> Vec<(u8, String)> {
    HTML_HEADING
        .captures_iter(content)
        .map(|caps| {
            let level = caps[1].parse().unwrap_or(2);
            (level, html_text(&caps[2]))
        })
        .collect()
}
