//! Process-step (timeline) detection
//!
//!     A numbered list is a timeline only when three gates pass: the heading above it names a
//!     process and not a generic feature list, the list has 3 to 8 items, and at least 30% of
//!     the items use sequencing or action vocabulary. Explicit `Step N:` lines are accepted on
//!     their own under the same size gate. Anything else stays a plain ordered list.

use super::raw_line;
use crate::analysis::lines::{classify, numbered_run, Line, LineKind};
use crate::analysis::text::split_title_description;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

static PROCESS_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:process|proces|werkwijze|how it works|hoe (?:het|werkt)|steps|stappen|stappenplan|procedure|workflow|aanpak|approach|getting started|aan de slag|how to)\b",
    )
    .unwrap()
});

static GENERIC_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:features?|kenmerken|functies|functionaliteiten|benefits|voordelen|specifications|specificaties)\b",
    )
    .unwrap()
});

// Prefix match only, so stems cover their inflections.
static STEP_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:first|then|next|after|afterwards|finally|lastly|once|eerst|daarna|vervolgens|nadat|tot slot|ten slotte|als laatste|install|configur|creat|set up|sign up|register|registreer|download|send|verzend|verstuur|controleer|check|verify|review|plan|test|deploy|launch|lanceer|choose|kies|select|schedule|submit|connect|koppel|meld|maak|start)",
    )
    .unwrap()
});

static STEP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:#{1,6}\s+)?(?:\*\*)?(?:step|stap)\s+(\d{1,2})\b(.*)$").unwrap()
});

const STEP_COUNT: RangeInclusive<usize> = 3..=8;
const MIN_VOCABULARY_RATIO: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: u32,
    pub title: String,
    pub description: String,
}

pub fn detect_process_steps(markdown: &str) -> Option<Vec<ProcessStep>> {
    let lines = classify(markdown);
    headed_steps(&lines).or_else(|| explicit_steps(markdown, &lines))
}

fn is_process_heading(text: &str) -> bool {
    PROCESS_HEADING.is_match(text) && !GENERIC_HEADING.is_match(text)
}

/// The first numbered list between a heading and the next heading.
fn list_under<'a>(lines: &[Line<'a>], heading: usize) -> Vec<&'a str> {
    for (index, line) in lines.iter().enumerate().skip(heading + 1) {
        match line.kind {
            LineKind::Numbered { .. } => return numbered_run(lines, index),
            LineKind::Heading { .. } => break,
            _ => {}
        }
    }
    Vec::new()
}

fn reads_like_steps(items: &[&str]) -> bool {
    let hits = items
        .iter()
        .filter(|item| STEP_VOCABULARY.is_match(item))
        .count();
    hits as f64 / items.len() as f64 >= MIN_VOCABULARY_RATIO
}

fn headed_steps(lines: &[Line<'_>]) -> Option<Vec<ProcessStep>> {
    lines.iter().enumerate().find_map(|(index, line)| {
        let LineKind::Heading { text, .. } = line.kind else {
            return None;
        };
        if !is_process_heading(text) {
            return None;
        }
        let items = list_under(lines, index);
        if !STEP_COUNT.contains(&items.len()) || !reads_like_steps(&items) {
            return None;
        }
        Some(
            items
                .iter()
                .zip(1..)
                .map(|(item, number)| {
                    let (title, description) = split_title_description(item);
                    ProcessStep {
                        number,
                        title,
                        description,
                    }
                })
                .collect(),
        )
    })
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '.' | ')' | '-' | '–' | '—')
}

/// `Step N: **Title** – description` lines anywhere outside code blocks.
fn explicit_steps(markdown: &str, lines: &[Line<'_>]) -> Option<Vec<ProcessStep>> {
    let steps: Vec<ProcessStep> = lines
        .iter()
        .filter(|line| !matches!(line.kind, LineKind::Code | LineKind::Blank))
        .filter_map(|line| {
            let caps = STEP_LINE.captures(raw_line(markdown, line))?;
            let number = caps[1].parse().ok()?;
            let mut rest = caps
                .get(2)
                .map_or("", |m| m.as_str())
                .trim_start_matches(is_separator);
            // Closing bold of a `**Step 1:**` label.
            if let Some(after) = rest.strip_prefix("**") {
                if after.is_empty() || after.starts_with(is_separator) {
                    rest = after.trim_start_matches(is_separator);
                }
            }
            let (title, description) = split_title_description(rest);
            let title = if title.is_empty() {
                format!("Step {number}")
            } else {
                title
            };
            Some(ProcessStep {
                number,
                title,
                description,
            })
        })
        .collect();

    STEP_COUNT.contains(&steps.len()).then_some(steps)
}
