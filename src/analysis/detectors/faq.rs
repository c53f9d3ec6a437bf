use crate::analysis::lines::{classify, Line, LineKind};
use crate::analysis::text::strip_inline_markdown;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\*\*)?(?:q|question|vraag)\s*[:.]\s*(?:\*\*)?\s*(.+?)\s*(?:\*\*)?$")
        .unwrap()
});
static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\*\*)?(?:a|answer|antwoord)\s*[:.]\s*(?:\*\*)?\s*(.+?)\s*(?:\*\*)?$")
        .unwrap()
});
static BOLD_QUESTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+\?)\*\*$").unwrap());

const MIN_ITEMS: usize = 2;
const MAX_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Question/answer pairs: explicit `Q:`/`A:` lines first, else question headings (or bold
/// questions) followed by prose. Needs at least two pairs; keeps at most ten.
pub fn detect_faq_items(markdown: &str) -> Option<Vec<FaqItem>> {
    let lines = classify(markdown);
    let mut items = labelled_pairs(&lines);
    if items.len() < MIN_ITEMS {
        items = question_headings(&lines);
    }
    if items.len() < MIN_ITEMS {
        return None;
    }
    items.truncate(MAX_ITEMS);
    Some(items)
}

/// Text of lines that can carry a label or continuation: prose and bullets.
fn prose<'a>(line: &Line<'a>) -> Option<&'a str> {
    match line.kind {
        LineKind::Text(text) | LineKind::Bullet(text) => Some(text),
        _ => None,
    }
}

struct Pending {
    question: String,
    answer: Vec<String>,
}

impl Pending {
    fn finish(self, items: &mut Vec<FaqItem>) {
        if !self.answer.is_empty() {
            items.push(FaqItem {
                question: self.question,
                answer: self.answer.join(" "),
            });
        }
    }
}

fn labelled_pairs(lines: &[Line<'_>]) -> Vec<FaqItem> {
    let mut items = Vec::new();
    let mut pending: Option<Pending> = None;

    for line in lines {
        if line.is_heading() {
            if let Some(done) = pending.take() {
                done.finish(&mut items);
            }
            continue;
        }
        let Some(text) = prose(line) else {
            continue;
        };

        if let Some(caps) = QUESTION_LINE.captures(text) {
            if let Some(done) = pending.take() {
                done.finish(&mut items);
            }
            pending = Some(Pending {
                question: strip_inline_markdown(&caps[1]),
                answer: Vec::new(),
            });
        } else if let Some(current) = pending.as_mut() {
            if current.answer.is_empty() {
                if let Some(caps) = ANSWER_LINE.captures(text) {
                    current.answer.push(strip_inline_markdown(&caps[1]));
                }
            } else {
                current.answer.push(strip_inline_markdown(text));
            }
        }
    }
    if let Some(done) = pending {
        done.finish(&mut items);
    }
    items
}

fn question_headings(lines: &[Line<'_>]) -> Vec<FaqItem> {
    let mut items = Vec::new();
    let mut pending: Option<Pending> = None;

    for line in lines {
        let question = match line.kind {
            LineKind::Heading { text, .. } => {
                let text = strip_inline_markdown(text);
                if let Some(done) = pending.take() {
                    done.finish(&mut items);
                }
                text.ends_with('?').then_some(text)
            }
            LineKind::Text(text) => BOLD_QUESTION
                .captures(text)
                .map(|caps| strip_inline_markdown(&caps[1])),
            _ => None,
        };

        if let Some(question) = question {
            if let Some(done) = pending.take() {
                done.finish(&mut items);
            }
            pending = Some(Pending {
                question,
                answer: Vec::new(),
            });
            continue;
        }

        if let (Some(current), Some(text)) = (pending.as_mut(), prose(line)) {
            current.answer.push(strip_inline_markdown(text));
        }
    }
    if let Some(done) = pending {
        done.finish(&mut items);
    }
    items
}
