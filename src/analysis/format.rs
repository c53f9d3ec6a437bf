//! Input dialect detection and the Markdown view used by the semantic detectors.
//!
//!     The dialect is probed once at the entry point and passed along as a [`DocumentFormat`].
//!     Extractors that only understand Markdown lines get [`markdown_view`]: Markdown passes
//!     through untouched, HTML is flattened into equivalent Markdown lines.

use super::text::{decode_entities, strip_tags};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

static HTML_PROBE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:h[1-6]|p|div|section|article|ul|ol|table|blockquote)\b[^>]*>").unwrap()
});
static SCRIPT_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?(?:strong|b)\b[^>]*>").unwrap());
static ORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<ol\b[^>]*>(.*?)</ol\s*>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>").unwrap());
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());
static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<blockquote\b[^>]*>(.*?)</blockquote\s*>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BLOCK_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</(?:p|div|section|article|header|footer|aside|ul|figure|table|tr)\s*>")
        .unwrap()
});
static EXTRA_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// The two input dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Html,
    Markdown,
}

impl DocumentFormat {
    /// Probe for block-level HTML tags; anything else is treated as Markdown.
    pub fn detect(content: &str) -> Self {
        if HTML_PROBE.is_match(content) {
            DocumentFormat::Html
        } else {
            DocumentFormat::Markdown
        }
    }
}

/// Markdown rendition of `content` for line-oriented extractors.
pub fn markdown_view(content: &str, format: DocumentFormat) -> Cow<'_, str> {
    match format {
        DocumentFormat::Markdown => Cow::Borrowed(content),
        DocumentFormat::Html => Cow::Owned(html_to_markdown(content)),
    }
}

fn inline_text(html: &str) -> String {
    strip_tags(html, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten HTML into Markdown lines: headings, numbered and bulleted items, blockquotes and
/// bold text survive; every other tag is dropped.
fn html_to_markdown(html: &str) -> String {
    let text = SCRIPT_STYLE.replace_all(html, "");
    let text = STRONG.replace_all(&text, "**");

    let text = ORDERED_LIST.replace_all(&text, |caps: &Captures| {
        let items: Vec<String> = LIST_ITEM
            .captures_iter(&caps[1])
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, inline_text(&item[1])))
            .collect();
        format!("\n\n{}\n\n", items.join("\n"))
    });
    let text = LIST_ITEM.replace_all(&text, |caps: &Captures| {
        format!("\n- {}\n", inline_text(&caps[1]))
    });
    let text = HEADING.replace_all(&text, |caps: &Captures| {
        let level: usize = caps[1].parse().unwrap_or(2);
        format!("\n\n{} {}\n\n", "#".repeat(level), inline_text(&caps[2]))
    });
    let text = BLOCKQUOTE.replace_all(&text, |caps: &Captures| {
        let inner = LINE_BREAK.replace_all(&caps[1], "\n");
        let inner = BLOCK_END.replace_all(&inner, "\n");
        let lines: Vec<String> = inner
            .lines()
            .map(inline_text)
            .filter(|line| !line.is_empty())
            .map(|line| format!("> {line}"))
            .collect();
        format!("\n\n{}\n\n", lines.join("\n"))
    });
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = BLOCK_END.replace_all(&text, "\n\n");
    let text = decode_entities(&strip_tags(&text, ""));

    let trimmed: Vec<&str> = text.lines().map(str::trim).collect();
    EXTRA_BLANKS
        .replace_all(&trimmed.join("\n"), "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(DocumentFormat::detect("<h2>Title</h2>"), DocumentFormat::Html);
        assert_eq!(
            DocumentFormat::detect("<p class=\"lead\">Hi</p>"),
            DocumentFormat::Html
        );
        assert_eq!(DocumentFormat::detect("## Title\n\ntext"), DocumentFormat::Markdown);
        // Inline tags alone do not make a document HTML.
        assert_eq!(
            DocumentFormat::detect("Some <em>inline</em> text"),
            DocumentFormat::Markdown
        );
    }

    #[test]
    fn test_markdown_view_borrows_markdown() {
        let content = "## Title";
        assert!(matches!(
            markdown_view(content, DocumentFormat::Markdown),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_html_to_markdown() {
        let html = "<h2>Our <em>Process</em></h2>\
                    <ol><li>Install it</li><li><strong>Configure</strong> it</li></ol>\
                    <ul><li>Point &amp; click</li></ul>\
                    <p>Closing words.</p>";
        let md = html_to_markdown(html);
        assert_eq!(
            md,
            "## Our Process\n\n1. Install it\n2. **Configure** it\n\n- Point & click\n\nClosing words."
        );
    }

    #[test]
    fn test_html_blockquote() {
        let html = "<blockquote><p>\"Great service.\"</p><p>— Jan</p></blockquote>";
        assert_eq!(html_to_markdown(html), "> \"Great service.\"\n> — Jan");
    }
}
