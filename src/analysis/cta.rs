//! Call-to-action placement rules
//!
//!     A fixed rule set over the section list, not a detector:
//!     - after-intro when the intro runs longer than 200 chars
//!     - mid-content at 40% depth once there are at least four sections
//!     - before-faq when the document has an FAQ marker
//!     - end, always

use super::sections::ArticleSection;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FAQ_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:faq|frequently asked questions|veelgestelde vragen|veel gestelde vragen)\b",
    )
    .unwrap()
});

const INTRO_CHARS: usize = 200;
const MID_CONTENT_MIN_SECTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaPosition {
    AfterIntro,
    MidContent,
    BeforeFaq,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaPlacement {
    pub position: CtaPosition,
    pub section_index: usize,
    pub reason: String,
}

impl CtaPlacement {
    fn new(position: CtaPosition, section_index: usize, reason: impl Into<String>) -> Self {
        Self {
            position,
            section_index,
            reason: reason.into(),
        }
    }
}

/// Suggested CTA slots for `sections`, given the Markdown view the sections came from.
pub fn cta_placements(sections: &[ArticleSection], markdown: &str) -> Vec<CtaPlacement> {
    let mut placements = Vec::new();
    let count = sections.len();
    if count == 0 {
        return placements;
    }
    let last = count - 1;

    if let Some(intro) = sections.first().filter(|section| section.is_intro()) {
        let chars = intro.content.chars().count();
        if chars > INTRO_CHARS {
            placements.push(CtaPlacement::new(
                CtaPosition::AfterIntro,
                0,
                format!("Intro is {chars} characters; readers are engaged after it"),
            ));
        }
    }

    if count >= MID_CONTENT_MIN_SECTIONS {
        placements.push(CtaPlacement::new(
            CtaPosition::MidContent,
            count * 2 / 5,
            format!("{count} sections; a mid-content CTA catches readers at 40% depth"),
        ));
    }

    if FAQ_MARKER.is_match(markdown) {
        let index = sections
            .iter()
            .position(|section| FAQ_MARKER.is_match(&section.heading))
            .unwrap_or(last);
        placements.push(CtaPlacement::new(
            CtaPosition::BeforeFaq,
            index,
            "FAQ present; answer objections before the final ask",
        ));
    }

    placements.push(CtaPlacement::new(
        CtaPosition::End,
        last,
        "Closing CTA after the last section",
    ));
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str) -> ArticleSection {
        ArticleSection::new(2, heading, "body")
    }

    #[test]
    fn test_end_is_always_present() {
        let sections = vec![section("Only")];
        let placements = cta_placements(&sections, "## Only\nbody");
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].position, CtaPosition::End);
        assert_eq!(placements[0].section_index, 0);
    }

    #[test]
    fn test_long_intro_and_mid_content() {
        let mut sections = vec![ArticleSection::intro("x".repeat(201))];
        sections.extend(["A", "B", "C", "D"].map(section));
        let positions: Vec<_> = cta_placements(&sections, "")
            .into_iter()
            .map(|p| (p.position, p.section_index))
            .collect();
        assert_eq!(
            positions,
            vec![
                (CtaPosition::AfterIntro, 0),
                (CtaPosition::MidContent, 2),
                (CtaPosition::End, 4),
            ]
        );
    }

    #[test]
    fn test_short_intro_gets_no_cta() {
        let sections = vec![ArticleSection::intro("x".repeat(200)), section("A")];
        let placements = cta_placements(&sections, "");
        assert!(placements
            .iter()
            .all(|p| p.position != CtaPosition::AfterIntro));
    }

    #[test]
    fn test_before_faq_targets_faq_section() {
        let sections = vec![section("Intro"), section("FAQ"), section("Contact")];
        let placements = cta_placements(&sections, "## FAQ\n");
        let before = placements
            .iter()
            .find(|p| p.position == CtaPosition::BeforeFaq)
            .unwrap();
        assert_eq!(before.section_index, 1);
    }

    #[test]
    fn test_position_serializes_kebab_case() {
        let json = serde_json::to_string(&CtaPosition::BeforeFaq).unwrap();
        assert_eq!(json, "\"before-faq\"");
    }
}
