//! Assembly tests: analysis output fed back through the builder

use pagesmith::analysis::{extract_headings, FaqItem, ProcessStep, Testimonial};
use pagesmith::assembly::{
    render_analysis, ArticleOptions, CtaOptions, FaqOptions, Link, RenderOptions,
    TestimonialsOptions, TimelineOptions,
};
use pagesmith::{analyze_content, markdown_to_html, DocumentFormat, SemanticBuilder};

const ARTICLE: &str = "# Guide to onboarding\n\n\
                       New customers decide in the first week.\n\n\
                       ## Welcome email\n\
                       Send it within the hour.\n\n\
                       ### Subject lines\n\
                       Keep them short.\n\n\
                       ## Product tour\n\
                       Show **one** feature at a time.\n\n\
                       ## Follow up\n\
                       Ask what is missing.\n";

#[test]
fn rendered_sections_keep_their_outline() {
    let analysis = analyze_content(ARTICLE, None);
    let mut builder = SemanticBuilder::new();
    for section in &analysis.sections {
        builder.build_section(section);
    }
    let html = builder.html();

    let from_markdown = extract_headings(ARTICLE, DocumentFormat::Markdown, 6);
    let from_html = extract_headings(&html, DocumentFormat::Html, 6);
    assert_eq!(from_html, from_markdown);
}

#[test]
fn article_wraps_every_section_and_emits_one_document() {
    let analysis = analyze_content(ARTICLE, None);
    let mut builder = SemanticBuilder::new();
    builder.build_article(&ArticleOptions {
        title: "Guide to onboarding".into(),
        author: Some("Sam Jansen".into()),
        sections: analysis.sections.clone(),
        ..ArticleOptions::default()
    });
    let html = builder.html();
    assert_eq!(html.matches("<section class=\"ps-section\"").count(), 3);
    assert!(html.contains("<strong>one</strong>"));

    let docs = builder.json_ld_documents();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["@type"], "Article");
    assert_eq!(docs[0]["headline"], "Guide to onboarding");
    assert_eq!(docs[0]["author"]["name"], "Sam Jansen");
}

#[test]
fn schema_components_chain_and_reset() {
    let mut builder = SemanticBuilder::with_class_prefix("acme");
    builder
        .build_faq(&FaqOptions {
            title: None,
            items: vec![FaqItem {
                question: "Is it <free>?".into(),
                answer: "Yes.".into(),
            }],
        })
        .build_timeline(&TimelineOptions {
            title: "How it works".into(),
            description: None,
            steps: vec![ProcessStep {
                number: 1,
                title: "Sign up".into(),
                description: String::new(),
            }],
        })
        .build_testimonials(&TestimonialsOptions {
            title: None,
            items: vec![Testimonial {
                quote: "It paid for itself in a month.".into(),
                author: "Jo".into(),
                role: None,
            }],
            item_reviewed: None,
        });

    let html = builder.html();
    assert!(html.contains("class=\"acme-faq\""));
    assert!(html.contains("Is it &lt;free&gt;?"));
    let types: Vec<_> = builder
        .json_ld_documents()
        .iter()
        .map(|doc| doc["@type"].clone())
        .collect();
    assert_eq!(types.len(), 3);
    assert_eq!(types[0], "FAQPage");
    assert_eq!(types[1], "HowTo");

    let scripts = builder.json_ld_scripts();
    assert_eq!(scripts.matches("<script type=\"application/ld+json\">").count(), 3);

    builder.reset();
    assert!(builder.html().is_empty());
    assert!(builder.json_ld_documents().is_empty());
}

#[test]
fn empty_lists_render_nothing() {
    let mut builder = SemanticBuilder::new();
    builder.build_faq(&FaqOptions::default());
    assert!(builder.html().is_empty());
    assert!(builder.json_ld_documents().is_empty());
}

#[test]
fn full_page_from_analysis() {
    let content = format!(
        "{ARTICLE}\n## FAQ\nQ: How long does onboarding take?\nA: About a week.\n\
         Q: Can we skip the tour?\nA: Yes.\n"
    );
    let analysis = analyze_content(&content, None);
    let mut builder = SemanticBuilder::new();
    render_analysis(
        &mut builder,
        &analysis,
        &RenderOptions {
            title: "Guide to onboarding".into(),
            cta: Some(CtaOptions {
                title: "Ready?".into(),
                text: None,
                button: Link::new("Start now", "/start"),
                secondary: None,
            }),
            ..RenderOptions::default()
        },
    );
    let html = builder.html();
    assert!(html.contains("<nav class=\"ps-toc\""));
    assert!(html.contains("ps-cta__button"));
    assert!(html.contains("itemtype=\"https://schema.org/FAQPage\""));
}

#[test]
fn unsafe_links_never_reach_the_markup() {
    let html = markdown_to_html("[x](javascript:alert(1)) and ![y](JAVASCRIPT:alert(2))");
    assert!(!html.to_lowercase().contains("javascript:"));
}
