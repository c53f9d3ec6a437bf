use crate::analysis::lines::{classify, Line, LineKind};
use crate::analysis::text::strip_inline_markdown;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

static INLINE_TESTIMONIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[*_]*[“"](.+)[”"][*_]*\s*(?:[-–—~]+|,)\s*(\S.*)$"#).unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[*_]*[“"](.+)[”"][*_]*$"#).unwrap());
static ATTRIBUTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[-–—~]+)\s*(\S.*)$").unwrap());

const QUOTE_CHARS: RangeInclusive<usize> = 30..=300;
const MAX_TESTIMONIALS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Testimonial {
    fn parse(quote: &str, attribution: &str) -> Option<Self> {
        let quote = strip_inline_markdown(quote.trim_matches(|c| matches!(c, '"' | '“' | '”')));
        if !QUOTE_CHARS.contains(&quote.chars().count()) {
            return None;
        }
        let attribution = strip_inline_markdown(attribution);
        let (author, role) = match attribution.split_once(',') {
            Some((author, role)) if !role.trim().is_empty() => {
                (author.trim().to_string(), Some(role.trim().to_string()))
            }
            _ => (attribution.trim_end_matches(',').trim().to_string(), None),
        };
        if author.is_empty() {
            return None;
        }
        Some(Self {
            quote,
            author,
            role,
        })
    }
}

/// Quotes with attribution, inline (`"…" — Name, Role`) or as a blockquote whose last line (or
/// the line after it) is the attribution.
pub fn detect_testimonials(markdown: &str) -> Option<Vec<Testimonial>> {
    let lines = classify(markdown);
    let mut found = Vec::new();
    let mut index = 0;

    while index < lines.len() && found.len() < MAX_TESTIMONIALS {
        match lines[index].kind {
            LineKind::Quote(_) => {
                let (testimonial, next) = blockquote(&lines, index);
                found.extend(testimonial);
                index = next;
            }
            LineKind::Text(text) => {
                if let Some(caps) = INLINE_TESTIMONIAL.captures(text) {
                    found.extend(Testimonial::parse(&caps[1], &caps[2]));
                } else if let Some(caps) = QUOTED.captures(text) {
                    if let Some((attribution, next)) = attribution_after(&lines, index + 1) {
                        found.extend(Testimonial::parse(&caps[1], attribution));
                        index = next;
                        continue;
                    }
                }
                index += 1;
            }
            _ => index += 1,
        }
    }

    (!found.is_empty()).then_some(found)
}

/// An attribution line following `from`, skipping blank lines.
fn attribution_after<'a>(lines: &[Line<'a>], from: usize) -> Option<(&'a str, usize)> {
    let index = (from..lines.len()).find(|&i| !lines[i].is_blank())?;
    match lines[index].kind {
        LineKind::Text(text) => ATTRIBUTION
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| (m.as_str(), index + 1)),
        _ => None,
    }
}

fn blockquote(lines: &[Line<'_>], start: usize) -> (Option<Testimonial>, usize) {
    let mut body: Vec<&str> = Vec::new();
    let mut index = start;
    while let Some(&LineKind::Quote(text)) = lines.get(index).map(|line| &line.kind) {
        if !text.is_empty() {
            body.push(text);
        }
        index += 1;
    }

    let inline_attribution = body
        .last()
        .and_then(|last| ATTRIBUTION.captures(last))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    let (attribution, next) = match inline_attribution {
        Some(attribution) => {
            body.pop();
            (Some(attribution), index)
        }
        None => match attribution_after(lines, index) {
            Some((attribution, next)) => (Some(attribution), next),
            None => (None, index),
        },
    };

    let testimonial =
        attribution.and_then(|attribution| Testimonial::parse(&body.join(" "), attribution));
    (testimonial, next)
}
