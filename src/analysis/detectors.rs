//! Component-specific detectors
//!
//!     Each detector layers a semantic check over raw structural presence: a bulleted list is
//!     only a benefits grid under a benefits heading, a numbered list is only a timeline when
//!     its items read like steps. Detectors work on the Markdown view of the document and
//!     return `None` when the check fails.

pub mod benefits;
pub mod faq;
pub mod steps;
pub mod takeaways;
pub mod testimonials;

pub use benefits::{detect_benefits, BenefitItem};
pub use faq::{detect_faq_items, FaqItem};
pub use steps::{detect_process_steps, ProcessStep};
pub use takeaways::detect_key_takeaways;
pub use testimonials::{detect_testimonials, Testimonial};

use super::lines::{bullet_run, Line, LineKind};

/// Bullets that follow the heading at `heading`, allowing lead-in prose before the list.
///
/// Returns nothing when another heading comes first.
pub(crate) fn bullets_under<'a>(lines: &[Line<'a>], heading: usize) -> Vec<&'a str> {
    for (index, line) in lines.iter().enumerate().skip(heading + 1) {
        match line.kind {
            LineKind::Bullet(_) => return bullet_run(lines, index).0,
            LineKind::Heading { .. } => break,
            _ => {}
        }
    }
    Vec::new()
}

/// The source text of a classified line, without its line terminator.
pub(crate) fn raw_line<'a>(markdown: &'a str, line: &Line<'_>) -> &'a str {
    markdown[line.offset..]
        .lines()
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lines::classify;

    #[test]
    fn test_bullets_under_skips_lead_in() {
        let lines = classify("## Why\nSome lead in.\n\n- a\n- b\n## Next\n- c");
        assert_eq!(bullets_under(&lines, 0), vec!["a", "b"]);
    }

    #[test]
    fn test_bullets_under_stops_at_heading() {
        let lines = classify("## Why\nText\n## Next\n- c");
        assert!(bullets_under(&lines, 0).is_empty());
    }

    #[test]
    fn test_raw_line() {
        let markdown = "first\n**Step 1:** go\n";
        let lines = classify(markdown);
        assert_eq!(raw_line(markdown, &lines[1]), "**Step 1:** go");
    }
}
