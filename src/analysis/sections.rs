//! Section extraction
//!
//!     Sections split on level-2 headings. Text before the first one becomes an untitled intro
//!     section (level 0); a document without level-2 headings becomes a single level-2
//!     "Content" section holding the whole input.

use super::format::DocumentFormat;
use super::lines::{classify, LineKind};
use super::text::{html_text, slugify, strip_inline_markdown};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTML_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h2\b[^>]*>(.*?)</h2\s*>").unwrap());

pub const INTRO_ID: &str = "introduction";
pub const CONTENT_HEADING: &str = "Content";

/// A slice of the document under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSection {
    pub id: String,
    /// 0 for the untitled intro, otherwise the heading level.
    pub level: u8,
    pub heading: String,
    pub content: String,
}

impl ArticleSection {
    pub fn new(level: u8, heading: impl Into<String>, content: impl Into<String>) -> Self {
        let heading = heading.into();
        let id = slugify(&heading);
        Self {
            id,
            level,
            heading,
            content: content.into(),
        }
    }

    pub fn intro(content: impl Into<String>) -> Self {
        Self {
            id: INTRO_ID.to_string(),
            level: 0,
            heading: String::new(),
            content: content.into(),
        }
    }

    pub fn is_intro(&self) -> bool {
        self.level == 0
    }
}

/// Heading boundary: where the heading starts, where its body starts, and its text.
struct Boundary {
    start: usize,
    body: usize,
    heading: String,
}

pub fn extract_sections(content: &str, format: DocumentFormat) -> Vec<ArticleSection> {
    let boundaries = match format {
        DocumentFormat::Html => html_boundaries(content),
        DocumentFormat::Markdown => markdown_boundaries(content),
    };

    if boundaries.is_empty() {
        return vec![ArticleSection::new(2, CONTENT_HEADING, content.trim())];
    }

    let mut sections = Vec::with_capacity(boundaries.len() + 1);
    let intro = content[..boundaries[0].start].trim();
    if !intro.is_empty() {
        sections.push(ArticleSection::intro(intro));
    }
    for (i, boundary) in boundaries.iter().enumerate() {
        let end = boundaries
            .get(i + 1)
            .map_or(content.len(), |next| next.start);
        sections.push(ArticleSection::new(
            2,
            boundary.heading.clone(),
            content[boundary.body..end].trim(),
        ));
    }
    sections
}

fn markdown_boundaries(content: &str) -> Vec<Boundary> {
    let lines = classify(content);
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match line.kind {
            LineKind::Heading { level: 2, text } => Some(Boundary {
                start: line.offset,
                body: lines.get(i + 1).map_or(content.len(), |next| next.offset),
                heading: strip_inline_markdown(text),
            }),
            _ => None,
        })
        .collect()
}

fn html_boundaries(content: &str) -> Vec<Boundary> {
    HTML_H2
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Boundary {
                start: whole.start(),
                body: whole.end(),
                heading: html_text(&caps[1]),
            })
        })
        .collect()
}
