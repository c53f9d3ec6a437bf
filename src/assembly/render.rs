//! Full-page rendering from an analysis result
//!
//!     Layout: hero, table of contents (three or more level-2 headings), key takeaways, the
//!     article with CTAs placed in the gaps the placement rules chose, then the structured
//!     blocks (benefits, timeline, testimonials, FAQ).

use super::builder::SemanticBuilder;
use super::options::{
    ArticleOptions, BenefitsOptions, CtaOptions, FaqOptions, HeroOptions, KeyTakeawaysOptions,
    TestimonialsOptions, TimelineOptions, TocOptions,
};
use crate::analysis::lines::{classify, LineKind};
use crate::analysis::{ArticleSection, ContentAnalysisResult, CtaPosition};
use log::debug;
use std::collections::BTreeSet;

const MIN_TOC_ENTRIES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    /// CTA rendered at every placement; no CTAs without it.
    pub cta: Option<CtaOptions>,
}

/// Gap index a CTA goes into: gap `i` sits right before section `i`.
fn gap(position: CtaPosition, section_index: usize) -> usize {
    match position {
        CtaPosition::BeforeFaq => section_index,
        CtaPosition::AfterIntro | CtaPosition::MidContent | CtaPosition::End => section_index + 1,
    }
}

/// The intro without its level-1 heading lines.
fn without_title(intro: &str) -> String {
    let mut kept = String::with_capacity(intro.len());
    for (line, raw) in classify(intro).iter().zip(intro.split_inclusive('\n')) {
        if !matches!(line.kind, LineKind::Heading { level: 1, .. }) {
            kept.push_str(raw);
        }
    }
    kept.trim().to_string()
}

/// The hero is the page's only `<h1>`: the article headline becomes a paragraph and the
/// source title line is dropped from the intro.
pub fn render_analysis(
    builder: &mut SemanticBuilder,
    analysis: &ContentAnalysisResult,
    options: &RenderOptions,
) {
    builder.build_hero(&HeroOptions {
        title: options.title.clone(),
        subtitle: options.description.clone(),
        ..HeroOptions::default()
    });

    let toc: Vec<_> = analysis
        .headings
        .iter()
        .filter(|h| h.level == 2)
        .cloned()
        .collect();
    if toc.len() >= MIN_TOC_ENTRIES {
        builder.build_toc(&TocOptions {
            title: None,
            headings: toc,
        });
    }

    if let Some(items) = &analysis.key_takeaways {
        builder.build_key_takeaways(&KeyTakeawaysOptions {
            title: None,
            items: items.clone(),
        });
    }

    let gaps: BTreeSet<usize> = match &options.cta {
        Some(_) => analysis
            .cta_placements
            .iter()
            .map(|p| gap(p.position, p.section_index))
            .collect(),
        None => BTreeSet::new(),
    };
    debug!("rendering {} sections with CTAs at gaps {:?}", analysis.sections.len(), gaps);

    let article = ArticleOptions {
        title: options.title.clone(),
        description: options.description.clone(),
        author: options.author.clone(),
        date_published: None,
        sections: analysis.sections.clone(),
        keywords: analysis.seo_data.keywords.clone(),
        headline_in_hero: true,
    };
    builder.open_article(&article);
    for (index, section) in analysis.sections.iter().enumerate() {
        if let (true, Some(cta)) = (gaps.contains(&index), &options.cta) {
            builder.build_cta(cta);
        }
        if section.is_intro() {
            let intro = without_title(&section.content);
            if !intro.is_empty() {
                builder.build_section(&ArticleSection::intro(intro));
            }
        } else {
            builder.build_section(section);
        }
    }
    if let (true, Some(cta)) = (gaps.contains(&analysis.sections.len()), &options.cta) {
        builder.build_cta(cta);
    }
    builder.close_article();

    if let Some(items) = &analysis.benefits {
        builder.build_benefits(&BenefitsOptions {
            title: None,
            items: items.clone(),
        });
    }
    if let Some(steps) = &analysis.process_steps {
        builder.build_timeline(&TimelineOptions {
            title: "How it works".to_string(),
            description: None,
            steps: steps.clone(),
        });
    }
    if let Some(items) = &analysis.testimonials {
        builder.build_testimonials(&TestimonialsOptions {
            title: None,
            items: items.clone(),
            item_reviewed: None,
        });
    }
    if let Some(items) = &analysis.faq_items {
        builder.build_faq(&FaqOptions {
            title: None,
            items: items.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_content;
    use crate::assembly::options::Link;

    const CONTENT: &str = "Intro paragraph.\n\n\
        ## One\nAlpha\n\n## Two\nBeta\n\n## Three\nGamma\n\n## FAQ\n\
        Q: First?\nA: Yes.\nQ: Second?\nA: No.\n";

    fn cta() -> CtaOptions {
        CtaOptions {
            title: "Try it".into(),
            text: None,
            button: Link::new("Start", "/start"),
            secondary: None,
        }
    }

    #[test]
    fn test_gap_positions() {
        assert_eq!(gap(CtaPosition::BeforeFaq, 3), 3);
        assert_eq!(gap(CtaPosition::End, 3), 4);
        assert_eq!(gap(CtaPosition::AfterIntro, 0), 1);
    }

    #[test]
    fn test_render_page() {
        let analysis = analyze_content(CONTENT, None);
        let mut builder = SemanticBuilder::new();
        render_analysis(
            &mut builder,
            &analysis,
            &RenderOptions {
                title: "Page".into(),
                cta: Some(cta()),
                ..RenderOptions::default()
            },
        );
        let html = builder.html();
        assert!(html.starts_with("<header class=\"ps-hero\">"));
        assert!(html.contains("<nav class=\"ps-toc\""));
        assert!(html.contains("<section class=\"ps-faq\""));
        // Sections: intro, One, Two, Three, FAQ. Mid-content after Two, before-faq and end.
        assert_eq!(html.matches("<section class=\"ps-cta\">").count(), 3);

        let types: Vec<_> = builder
            .json_ld_documents()
            .iter()
            .map(|doc| doc["@type"].clone())
            .collect();
        assert_eq!(types, vec!["Article", "FAQPage"]);
    }

    #[test]
    fn test_hero_is_the_only_h1() {
        let content = "# Guide\n\nIntro text.\n\n## One\nAlpha\n\n## Two\nBeta\n";
        let analysis = analyze_content(content, None);
        let mut builder = SemanticBuilder::new();
        render_analysis(
            &mut builder,
            &analysis,
            &RenderOptions {
                title: "Guide".into(),
                ..RenderOptions::default()
            },
        );
        let html = builder.html();
        assert!(html.contains("<p itemprop=\"headline\">Guide</p>"));
        assert!(html.contains("<div class=\"ps-intro\"><p>Intro text.</p></div>"));

        let rendered = analyze_content(&html, None);
        assert_eq!(rendered.seo_data.h1_count, 1);
        assert!(!rendered.seo_data.has_multiple_h1);
    }

    #[test]
    fn test_title_only_intro_is_dropped() {
        assert_eq!(without_title("# Guide"), "");
        assert_eq!(without_title("# Guide\n\nLead.\n### Aside"), "Lead.\n### Aside");
        assert_eq!(without_title("```\n# not a title\n```"), "```\n# not a title\n```");
    }

    #[test]
    fn test_no_cta_without_options() {
        let analysis = analyze_content(CONTENT, None);
        let mut builder = SemanticBuilder::new();
        render_analysis(
            &mut builder,
            &analysis,
            &RenderOptions {
                title: "Page".into(),
                ..RenderOptions::default()
            },
        );
        assert!(!builder.html().contains("ps-cta"));
    }
}
