//! Markdown line classification
//!
//! Classification order matters:
//! 1. Lines inside fenced code blocks (and the fences themselves)
//! 2. Blank lines
//! 3. ATX headings
//! 4. Bullet items
//! 5. Numbered items
//! 6. Blockquote lines
//! 7. Default to text

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*[-*+][ \t]+(.+?)[ \t]*$").unwrap());
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(\d{1,3})[.)][ \t]+(.+?)[ \t]*$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*>[ \t]?(.*?)[ \t]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Code,
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    Numbered { number: u32, text: &'a str },
    Quote(&'a str),
    Text(&'a str),
}

/// A classified line and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub offset: usize,
    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading { .. })
    }
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Classify every line of a Markdown document.
pub fn classify(markdown: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut in_fence = false;
    let mut offset = 0usize;

    for raw in markdown.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        let start = offset;
        offset += raw.len();

        if is_fence(line) {
            in_fence = !in_fence;
            lines.push(Line {
                offset: start,
                kind: LineKind::Code,
            });
            continue;
        }
        let kind = if in_fence {
            LineKind::Code
        } else {
            classify_line(line)
        };
        lines.push(Line {
            offset: start,
            kind,
        });
    }
    lines
}

fn classify_line(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = HEADING.captures(line) {
        let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
        if let Some(text) = caps.get(2) {
            return LineKind::Heading {
                level,
                text: text.as_str(),
            };
        }
    }
    if let Some(text) = BULLET.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::Bullet(text.as_str());
    }
    if let Some(caps) = NUMBERED.captures(line) {
        if let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineKind::Numbered {
                number: number.as_str().parse().unwrap_or(0),
                text: text.as_str(),
            };
        }
    }
    if let Some(text) = QUOTE.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::Quote(text.as_str());
    }
    LineKind::Text(line.trim())
}

/// Bullets of the list that starts at or after `from`, skipping leading blank lines.
///
/// Stops at the first line that is neither a bullet nor blank. Returns the bullets and the
/// index after the last one.
pub fn bullet_run<'a>(lines: &[Line<'a>], from: usize) -> (Vec<&'a str>, usize) {
    let mut items = Vec::new();
    let mut index = from;
    while index < lines.len() {
        match lines[index].kind {
            LineKind::Bullet(text) => items.push(text),
            LineKind::Blank => {}
            _ => break,
        }
        index += 1;
    }
    (items, index)
}

/// Numbered items of the list that starts at or after `from`, skipping leading blank lines.
pub fn numbered_run<'a>(lines: &[Line<'a>], from: usize) -> Vec<&'a str> {
    let mut items = Vec::new();
    for line in &lines[from.min(lines.len())..] {
        match line.kind {
            LineKind::Numbered { text, .. } => items.push(text),
            LineKind::Blank => {}
            _ => break,
        }
    }
    items
}
