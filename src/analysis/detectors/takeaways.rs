use super::bullets_under;
use crate::analysis::lines::{bullet_run, classify, LineKind};
use crate::analysis::text::strip_inline_markdown;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

static TAKEAWAY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:key takeaways?|takeaways?|key points|highlights|summary|in short|tl;?dr|samenvatting|in het kort|kernpunten|belangrijkste punten)\b",
    )
    .unwrap()
});

const MIN_UNDER_HEADING: usize = 2;
const LEADING_LIST: RangeInclusive<usize> = 3..=6;

/// Takeaway bullets: a takeaway heading with at least two bullets, else a 3 to 6 item bullet
/// list that starts in the first quarter of the document.
pub fn detect_key_takeaways(markdown: &str) -> Option<Vec<String>> {
    let lines = classify(markdown);

    let headed = lines.iter().enumerate().find_map(|(index, line)| {
        let LineKind::Heading { text, .. } = line.kind else {
            return None;
        };
        if !TAKEAWAY_HEADING.is_match(text) {
            return None;
        }
        let bullets = bullets_under(&lines, index);
        (bullets.len() >= MIN_UNDER_HEADING).then_some(bullets)
    });

    let bullets = headed.or_else(|| {
        let first = lines
            .iter()
            .position(|line| matches!(line.kind, LineKind::Bullet(_)))?;
        if lines[first].offset >= markdown.len() / 4 {
            return None;
        }
        let (bullets, _) = bullet_run(&lines, first);
        LEADING_LIST.contains(&bullets.len()).then_some(bullets)
    })?;

    Some(bullets.into_iter().map(strip_inline_markdown).collect())
}
