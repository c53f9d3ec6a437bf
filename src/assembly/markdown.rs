//! Markdown → HTML converter
//!
//!     A small, forgiving converter for generated article prose. Block pass, per line:
//!     1. Fenced code blocks (an unclosed fence falls back to literal text)
//!     2. ATX headings, with slug ids
//!     3. Horizontal rules
//!     4. Blockquotes (consecutive `>` lines)
//!     5. List items, tagged ordered/unordered and grouped into contiguous same-kind lists
//!     6. Lines that already start with a tag pass through
//!     7. Everything else becomes a paragraph
//!
//!     Inline pass: code spans, then links and images in one scan (a leading `!` marks an
//!     image), then combined bold-italic before bold before italic on the text between them,
//!     so URLs and alt text never pick up emphasis. Text is escaped before any tag is
//!     produced. Nothing here fails; unknown syntax stays literal.

use super::escape::{escape_html, safe_escaped_url};
use crate::analysis::text::{slugify, strip_inline_markdown};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(?:([-*+])|(\d{1,9})[.)])[ \t]+(.*?)[ \t]*$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*>[ \t]?(.*)$").unwrap());
static RAW_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<[A-Za-z/!]").unwrap());
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*(```|~~~)[ \t]*([\w+-]*)").unwrap());

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(!?)\[([^\]\n]*)\]\(([^)\s]+)\)").unwrap());
static STRONG_EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*([^*\n]+?)\*\*\*").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").unwrap());
static EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

struct ListItem<'a> {
    kind: ListKind,
    number: Option<u64>,
    text: &'a str,
}

fn list_item(line: &str) -> Option<ListItem<'_>> {
    let caps = LIST_ITEM.captures(line)?;
    let text = caps.get(3).map_or("", |m| m.as_str());
    if caps.get(1).is_some() {
        Some(ListItem {
            kind: ListKind::Unordered,
            number: None,
            text,
        })
    } else {
        Some(ListItem {
            kind: ListKind::Ordered,
            number: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            text,
        })
    }
}

/// Convert a Markdown document to HTML, one block per output line.
pub fn markdown_to_html(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut blocks: Vec<String> = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if line.trim().is_empty() {
            index += 1;
            continue;
        }

        if let Some(caps) = FENCE.captures(line) {
            let marker = &caps[1];
            let closing = lines[index + 1..]
                .iter()
                .position(|l| l.trim_start().starts_with(marker))
                .map(|offset| index + 1 + offset);
            match closing {
                Some(end) => {
                    blocks.push(code_block(&caps[2], &lines[index + 1..end]));
                    index = end + 1;
                }
                None => {
                    blocks.push(format!("<p>{}</p>", escape_html(line.trim())));
                    index += 1;
                }
            }
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let level = caps[1].len();
            let text = &caps[2];
            blocks.push(format!(
                "<h{level} id=\"{}\">{}</h{level}>",
                slugify(&strip_inline_markdown(text)),
                render_inline(text)
            ));
            index += 1;
            continue;
        }

        if RULE.is_match(line) {
            blocks.push("<hr>".to_string());
            index += 1;
            continue;
        }

        if QUOTE.is_match(line) {
            let mut quoted = Vec::new();
            while let Some(caps) = lines.get(index).and_then(|l| QUOTE.captures(l)) {
                let text = caps.get(1).map_or("", |m| m.as_str()).trim();
                if !text.is_empty() {
                    quoted.push(render_inline(text));
                }
                index += 1;
            }
            blocks.push(format!("<blockquote><p>{}</p></blockquote>", quoted.join(" ")));
            continue;
        }

        if let Some(first) = list_item(line) {
            let kind = first.kind;
            let start = first.number;
            let mut items = Vec::new();
            while let Some(item) = lines.get(index).and_then(|l| list_item(l)) {
                if item.kind != kind {
                    break;
                }
                items.push(format!("<li>{}</li>", render_inline(item.text)));
                index += 1;
            }
            blocks.push(list_block(kind, start, &items));
            continue;
        }

        let trimmed = line.trim();
        if RAW_TAG.is_match(trimmed) {
            blocks.push(trimmed.to_string());
        } else {
            blocks.push(format!("<p>{}</p>", render_inline(trimmed)));
        }
        index += 1;
    }

    blocks.join("\n")
}

fn code_block(language: &str, lines: &[&str]) -> String {
    let code = escape_html(&lines.join("\n"));
    if language.is_empty() {
        format!("<pre><code>{code}</code></pre>")
    } else {
        format!(
            "<pre><code class=\"language-{}\">{code}</code></pre>",
            escape_html(language)
        )
    }
}

fn list_block(kind: ListKind, start: Option<u64>, items: &[String]) -> String {
    let body = items.join("");
    match (kind, start) {
        (ListKind::Unordered, _) => format!("<ul>{body}</ul>"),
        (ListKind::Ordered, Some(n)) if n != 1 => format!("<ol start=\"{n}\">{body}</ol>"),
        (ListKind::Ordered, _) => format!("<ol>{body}</ol>"),
    }
}

/// Render inline Markdown (code, links, images, emphasis) in one line of text.
pub fn render_inline(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CODE_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        html.push_str(&render_spans(&text[last..whole.start()]));
        html.push_str("<code>");
        html.push_str(&escape_html(&caps[1]));
        html.push_str("</code>");
        last = whole.end();
    }
    html.push_str(&render_spans(&text[last..]));
    html
}

/// Inline pass for text outside code spans.
fn render_spans(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = escape_html(text);
    let mut html = String::with_capacity(escaped.len());
    let mut last = 0;
    for caps in LINK.captures_iter(&escaped) {
        let Some(whole) = caps.get(0) else { continue };
        html.push_str(&emphasize(&escaped[last..whole.start()]));
        if &caps[1] == "!" {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                safe_escaped_url(&caps[3]),
                &caps[2]
            ));
        } else {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                safe_escaped_url(&caps[3]),
                emphasize(&caps[2])
            ));
        }
        last = whole.end();
    }
    html.push_str(&emphasize(&escaped[last..]));
    html
}

/// Emphasis on already-escaped text that contains no tags.
fn emphasize(text: &str) -> String {
    let text = STRONG_EM.replace_all(text, "<strong><em>$1</em></strong>");
    let text = STRONG.replace_all(&text, "<strong>$1</strong>");
    EM.replace_all(&text, "<em>$1</em>").into_owned()
}
