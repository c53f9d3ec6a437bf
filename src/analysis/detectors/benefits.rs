use super::bullets_under;
use crate::analysis::lines::{classify, LineKind};
use crate::analysis::text::split_title_description;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BENEFIT_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:benefits?|advantages?|why choose|why us|perks|voordelen|waarom kiezen|waarom wij|pluspunten)\b",
    )
    .unwrap()
});

const MIN_BENEFITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
}

/// Items of the first benefits list: a benefit-vocabulary heading followed by at least three
/// bullets.
pub fn detect_benefits(markdown: &str) -> Option<Vec<BenefitItem>> {
    let lines = classify(markdown);
    lines.iter().enumerate().find_map(|(index, line)| {
        let LineKind::Heading { text, .. } = line.kind else {
            return None;
        };
        if !BENEFIT_HEADING.is_match(text) {
            return None;
        }
        let bullets = bullets_under(&lines, index);
        if bullets.len() < MIN_BENEFITS {
            return None;
        }
        Some(
            bullets
                .into_iter()
                .map(|item| {
                    let (title, description) = split_title_description(item);
                    BenefitItem { title, description }
                })
                .collect(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benefits_with_descriptions() {
        let markdown = "## Voordelen\n\
                        Dit levert het op:\n\n\
                        - **Snel**: Binnen een dag live\n\
                        - Goedkoop - Geen opstartkosten\n\
                        - Flexibel – Maandelijks opzegbaar\n";
        let benefits = detect_benefits(markdown).unwrap();
        assert_eq!(benefits.len(), 3);
        assert_eq!(
            benefits[0],
            BenefitItem {
                title: "Snel".into(),
                description: "Binnen een dag live".into()
            }
        );
        assert_eq!(benefits[1].title, "Goedkoop");
        assert_eq!(benefits[2].description, "Maandelijks opzegbaar");
    }

    #[test]
    fn test_two_bullets_are_not_enough() {
        assert_eq!(detect_benefits("## Benefits\n- One\n- Two\n"), None);
    }

    #[test]
    fn test_plain_list_is_not_benefits() {
        assert_eq!(detect_benefits("## Ingredients\n- Flour\n- Eggs\n- Milk\n"), None);
    }

    #[test]
    fn test_later_heading_qualifies() {
        let markdown = "## Benefits\n- Only one\n\n## Why choose us\n- A\n- B\n- C\n";
        let benefits = detect_benefits(markdown).unwrap();
        assert_eq!(benefits.len(), 3);
        assert_eq!(benefits[0].title, "A");
        assert_eq!(benefits[0].description, "");
    }
}
