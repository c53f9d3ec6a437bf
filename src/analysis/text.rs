//! Text helpers shared by the extractors: slugs, tag/entity handling, inline Markdown
//! stripping, word counts.

use super::format::DocumentFormat;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});").unwrap());
static MD_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_STRONG_EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static MD_STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap());
static MD_EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static MD_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Lowercase, punctuation-stripped, hyphen-joined slug.
///
/// Deterministic, but two headings with the same text get the same slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    kept.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Remove HTML tags, replacing each with `replacement`.
pub fn strip_tags(html: &str, replacement: &str) -> String {
    TAG.replace_all(html, replacement).into_owned()
}

/// Decode the common named entities and numeric character references in one pass.
///
/// Unknown entities are left as written.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name.strip_prefix("#x").or(name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match name {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    "ndash" => Some('–'),
                    "mdash" => Some('—'),
                    "hellip" => Some('…'),
                    "euro" => Some('€'),
                    _ => None,
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain text of an HTML fragment.
pub fn html_text(html: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_tags(html, "")))
}

/// Remove inline Markdown syntax (emphasis, code, links, images), keeping the visible text.
pub fn strip_inline_markdown(text: &str) -> String {
    let text = MD_IMAGE.replace_all(text, "$1");
    let text = MD_LINK.replace_all(&text, "$1");
    let text = MD_CODE.replace_all(&text, "$1");
    let text = MD_STRONG_EM.replace_all(&text, "$1");
    let text = MD_STRONG.replace_all(&text, "$1$2");
    let text = MD_EM.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Count words: whitespace-separated tokens holding at least one alphanumeric char.
///
/// Markdown syntax tokens (`##`, `-`, `>`, `|`) carry no alphanumerics and drop out on their
/// own; HTML has its tags removed first.
pub fn count_words(content: &str, format: DocumentFormat) -> usize {
    let text = match format {
        DocumentFormat::Html => decode_entities(&strip_tags(content, " ")),
        DocumentFormat::Markdown => content.to_string(),
    };
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

/// Minutes needed to read `word_count` words, rounded up.
pub fn reading_time(word_count: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute)
}

/// Split a list item into a title and a description.
///
/// Handles `**Title**: description`, `**Title** – description` and plain `Title: description`
/// / `Title - description`. Items without a separator become all title.
pub fn split_title_description(item: &str) -> (String, String) {
    let item = item.trim();

    if let Some(rest) = item.strip_prefix("**") {
        if let Some(close) = rest.find("**") {
            let title = rest[..close].trim().trim_end_matches(':').trim();
            let description = rest[close + 2..]
                .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—'))
                .trim();
            if !title.is_empty() {
                return (
                    strip_inline_markdown(title),
                    strip_inline_markdown(description),
                );
            }
        }
    }

    let separators = [":", " - ", " – ", " — "];
    let split = separators
        .iter()
        .filter_map(|sep| item.find(sep).map(|pos| (pos, sep.len())))
        .min_by_key(|(pos, _)| *pos);

    match split {
        Some((pos, len)) if pos > 0 => (
            strip_inline_markdown(&item[..pos]),
            strip_inline_markdown(&item[pos + len..]),
        ),
        _ => (strip_inline_markdown(item), String::new()),
    }
}
