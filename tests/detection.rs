//! Property and boundary tests for the component detector

use pagesmith::config::{DetectionConfig, OversizePolicy};
use pagesmith::detection::fast_path;
use pagesmith::{detect_component_by_type, detect_components, has_component, ComponentType, Detector};
use proptest::prelude::*;
use std::time::{Duration, Instant};

const FRAGMENTS: &[&str] = &[
    "# Launch faster",
    "Lead paragraph about the product.",
    "## Section heading",
    "### Sub heading",
    "- bullet item",
    "* star bullet",
    "1. first step",
    "2. second step",
    "| a | b |",
    "|---|---|",
    "| 1 | 2 |",
    "![alt text](/img.png)",
    "[Get started](/signup)",
    "Q: Is it free?",
    "A: Yes, always.",
    "## FAQ",
    "## Key takeaways",
    "## Table of contents",
    "- [Intro](#intro)",
    "<table><tr><td>x</td></tr></table>",
    "<div class=\"cta\">Buy now</div>",
    "Written by Jane Doe",
    "",
    "plain prose with ünïcödé and emoji 🚀",
];

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..80).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn precise_path_is_sorted_and_disjoint(content in document()) {
        let components = detect_components(&content);
        for pair in components.windows(2) {
            prop_assert!(pair[0].start_index <= pair[1].start_index);
            prop_assert!(pair[0].end_index <= pair[1].start_index, "overlap: {:?}", pair);
        }
        for component in &components {
            prop_assert!(component.start_index < component.end_index);
            prop_assert!(component.end_index <= content.len());
            prop_assert!(content.is_char_boundary(component.start_index));
            prop_assert!(content.is_char_boundary(component.end_index));
        }
    }

    #[test]
    fn detection_is_idempotent(content in document()) {
        prop_assert_eq!(detect_components(&content), detect_components(&content));
    }

    #[test]
    fn by_type_agrees_with_has(content in document()) {
        for ty in ComponentType::SPECIFICITY_ORDER {
            let found = detect_component_by_type(&content, ty);
            prop_assert_eq!(!found.is_empty(), has_component(&content, ty));
            prop_assert!(found.iter().all(|c| c.component_type == ty));
        }
    }
}

#[test]
fn adversarial_large_input_takes_fast_path() {
    let line = "Q: ## ### **[[(( - * 1. | | ![ <div class=\"faq\" ";
    let content = line.repeat(40_000 / line.len());
    assert!(content.len() > 10_000);

    let components = detect_components(&content);
    assert!(components.iter().all(|c| c.end_index <= content.len()));
    assert!(components.iter().all(|c| {
        c.metadata
            .as_ref()
            .map(|m| m.get("detection").map(String::as_str) == Some("fast-path"))
            .unwrap_or(false)
    }));
}

#[test]
fn content_beyond_cap_is_ignored() {
    let table = "\n| a | b |\n|---|---|\n| 1 | 2 |\n";

    let mut beyond = "x".repeat(50_100);
    beyond.push_str(table);
    assert!(detect_component_by_type(&beyond, ComponentType::Table).is_empty());
    assert!(!has_component(&beyond, ComponentType::Table));

    let mut within = table.to_string();
    within.push_str(&"x".repeat(50_100));
    assert_eq!(detect_component_by_type(&within, ComponentType::Table).len(), 1);
    assert!(has_component(&within, ComponentType::Table));
}

#[test]
fn everything_reported_lies_under_the_cap() {
    let mut content = "## Section\n- a\n- b\n\n".repeat(3_000);
    content.push_str("![late](/late.png)");
    assert!(content.len() > 50_000);
    let components = detect_components(&content);
    assert!(!components.is_empty());
    assert!(components.iter().all(|c| c.end_index <= 50_000));
}

#[test]
fn custom_limits_apply() {
    let config = DetectionConfig {
        fast_path_threshold: 100_000,
        max_content_length: 100_000,
        ..DetectionConfig::default()
    };
    let mut content = "Filler prose line.\n".repeat(800);
    content.push_str("\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    let components = Detector::new(config).detect(&content);
    let table = components
        .iter()
        .find(|c| c.component_type == ComponentType::Table)
        .expect("table on the precise path");
    assert_eq!(
        table.metadata.as_ref().and_then(|m| m.get("pattern")).map(String::as_str),
        Some("markdown-table")
    );
}

const IMAGE: &str = "![a](/a.png)";

/// `IMAGE` placed so its closing paren is the last byte of a `len`-byte document.
fn image_ending_at(len: usize) -> String {
    let mut content = "x".repeat(len - IMAGE.len());
    content.push_str(IMAGE);
    content
}

fn is_fast_path(component: &pagesmith::DetectedComponent) -> bool {
    component
        .metadata
        .as_ref()
        .and_then(|m| m.get("detection"))
        .map(String::as_str)
        == Some("fast-path")
}

#[test]
fn content_exactly_at_cap_is_kept_whole() {
    let at_cap = image_ending_at(50_000);
    assert_eq!(at_cap.len(), 50_000);
    assert!(has_component(&at_cap, ComponentType::Image));
    assert_eq!(detect_component_by_type(&at_cap, ComponentType::Image).len(), 1);

    let over = image_ending_at(50_001);
    assert!(!has_component(&over, ComponentType::Image));
    assert!(detect_component_by_type(&over, ComponentType::Image).is_empty());
}

#[test]
fn cap_inside_a_multibyte_char_cuts_before_it() {
    // 'é' occupies bytes 49_999 and 50_000, straddling the cap.
    let mut content = "x".repeat(49_999);
    content.push('é');
    content.push_str(IMAGE);
    assert!(!content.is_char_boundary(50_000));

    assert!(!has_component(&content, ComponentType::Image));
    let components = detect_components(&content);
    assert!(components.iter().all(|c| c.end_index <= 49_999));
}

#[test]
fn multibyte_content_at_cap_is_kept_whole() {
    let mut content = "é".repeat((50_000 - IMAGE.len()) / 2);
    if content.len() + IMAGE.len() < 50_000 {
        content.push('x');
    }
    content.push_str(IMAGE);
    assert_eq!(content.len(), 50_000);
    assert!(has_component(&content, ComponentType::Image));
}

#[test]
fn reject_policy_allows_exactly_the_cap() {
    let detector = Detector::new(DetectionConfig {
        oversize_policy: OversizePolicy::Reject,
        ..DetectionConfig::default()
    });
    assert!(detector.try_detect(&"x".repeat(50_000)).is_ok());
    assert!(detector.try_detect(&"x".repeat(50_001)).is_err());
}

fn list_then_padding(len: usize) -> String {
    let mut content = "- a\n- b\n".to_string();
    content.push_str(&"x".repeat(len - content.len()));
    content
}

#[test]
fn threshold_length_stays_on_precise_path() {
    let content = list_then_padding(10_000);
    let components = detect_components(&content);
    let list = components
        .iter()
        .find(|c| c.component_type == ComponentType::List)
        .expect("list");
    assert!(list.metadata.as_ref().is_some_and(|m| m.contains_key("pattern")));
    assert!(!components.iter().any(is_fast_path));
}

#[test]
fn one_byte_over_threshold_takes_fast_path() {
    let content = list_then_padding(10_001);
    let components = detect_components(&content);
    assert!(components
        .iter()
        .any(|c| c.component_type == ComponentType::List));
    assert!(components.iter().all(is_fast_path));
}

fn fastest_scan(content: &str, config: &DetectionConfig) -> Duration {
    (0..5)
        .map(|_| {
            let started = Instant::now();
            std::hint::black_box(fast_path::scan(content, config));
            started.elapsed()
        })
        .min()
        .unwrap_or_default()
}

#[test]
fn fast_path_scales_linearly_on_repeated_markers() {
    let config = DetectionConfig::default();
    let small = "![".repeat(25_000);
    let large = "![".repeat(250_000);

    let small_time = fastest_scan(&small, &config).max(Duration::from_micros(50));
    let large_time = fastest_scan(&large, &config);
    assert!(
        large_time < small_time * 25,
        "10x input took {:?} vs {:?}",
        large_time,
        small_time
    );
}
