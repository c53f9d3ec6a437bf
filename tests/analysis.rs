//! End-to-end scenarios for the structural analyzer

use pagesmith::analysis::{CtaPosition, ProcessStep};
use pagesmith::config::AnalysisConfig;
use pagesmith::{analyze_content, Analyzer, DocumentFormat};
use rstest::rstest;

const PROCESS_LIST: &str = "1. Installeer de software\n\
                            2. Configureer de instellingen\n\
                            3. Verzend de eerste campagne\n\
                            4. Controleer de resultaten\n";

#[rstest]
#[case::dutch_process("Ons Proces", Some(4))]
#[case::english_process("How it works", Some(4))]
#[case::features("Kenmerken", None)]
#[case::benefits("Benefits", None)]
fn process_steps_need_a_process_heading(#[case] heading: &str, #[case] expected: Option<usize>) {
    let content = format!("# Onboarding\n\nIntro.\n\n## {heading}\n\n{PROCESS_LIST}");
    let result = analyze_content(&content, None);
    assert_eq!(result.process_steps.as_ref().map(Vec::len), expected);
}

#[test]
fn process_steps_keep_numbers_and_titles() {
    let content = format!("## Ons Proces\n\n{PROCESS_LIST}");
    let steps = analyze_content(&content, None).process_steps.unwrap();
    assert_eq!(
        steps.last(),
        Some(&ProcessStep {
            number: 4,
            title: "Controleer de resultaten".into(),
            description: String::new(),
        })
    );
}

#[test]
fn faq_article_end_to_end() {
    let content = "# Pricing guide\n\n\
                   Everything about our plans.\n\n\
                   ## Plans\n\
                   Three plans, billed monthly.\n\n\
                   ## FAQ\n\
                   Q: Is there a free trial?\n\
                   A: Yes, fourteen days.\n\
                   Q: Can I switch plans?\n\
                   A: At any time.\n";
    let result = analyze_content(content, Some("Pricing guide"));

    let faq = result.faq_items.expect("faq detected");
    assert_eq!(faq.len(), 2);
    assert_eq!(faq[0].question, "Is there a free trial?");
    assert_eq!(faq[1].answer, "At any time.");

    let faq_index = result
        .sections
        .iter()
        .position(|s| s.heading == "FAQ")
        .unwrap();
    assert!(result
        .cta_placements
        .iter()
        .any(|p| p.position == CtaPosition::BeforeFaq && p.section_index == faq_index));
    assert_eq!(
        result.cta_placements.last().map(|p| p.position),
        Some(CtaPosition::End)
    );
}

#[test]
fn sections_partition_the_content_in_order() {
    let content = "Opening words.\n\n## One\nFirst body.\n\n## Two\nSecond body.\n### Detail\nMore.\n";
    let result = analyze_content(content, None);
    let headings: Vec<_> = result.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(headings, vec!["", "One", "Two"]);
    assert!(result.sections[0].is_intro());
    assert!(result.sections[2].content.contains("### Detail"));
    assert_eq!(result.sections[2].id, "two");
}

#[test]
fn content_without_level_two_headings_is_one_section() {
    let result = analyze_content("Just a paragraph.\n\n### Minor\nText.", None);
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].heading, "Content");
}

#[test]
fn html_and_markdown_agree_on_outline() {
    let markdown = "# Guide\n\n## Setup\nText.\n\n## Usage\nText.\n";
    let html = "<h1>Guide</h1><h2>Setup</h2><p>Text.</p><h2>Usage</h2><p>Text.</p>";
    let from_markdown = analyze_content(markdown, None);
    let from_html = analyze_content(html, None);
    assert_eq!(from_html.format, DocumentFormat::Html);
    assert_eq!(from_markdown.headings, from_html.headings);
    assert_eq!(from_markdown.sections.len(), from_html.sections.len());
}

#[test]
fn seo_flags_multiple_h1_and_skipped_levels() {
    let result = analyze_content("# One\n# Two\n## Fine\n#### Skipped\n", None);
    assert_eq!(result.seo_data.h1_count, 2);
    assert!(result.seo_data.has_multiple_h1);
    assert!(!result.seo_data.missing_h1);
    assert_eq!(result.seo_data.hierarchy_issues.len(), 1);
}

#[test]
fn reading_time_follows_configured_pace() {
    let content = "word ".repeat(450);
    let analyzer = Analyzer::new(AnalysisConfig {
        words_per_minute: 100,
        ..AnalysisConfig::default()
    });
    let result = analyzer.analyze(&content, None);
    assert_eq!(result.word_count, 450);
    assert_eq!(result.reading_time, 5);
}

#[test]
fn result_serializes_camel_case() {
    let result = analyze_content("# Title\n\nBody text here.", None);
    let value = serde_json::to_value(&result).unwrap();
    assert!(value.get("wordCount").is_some());
    assert!(value.get("ctaPlacements").is_some());
    assert!(value.get("seoData").is_some());
    assert!(value.get("faqItems").is_none());
}
