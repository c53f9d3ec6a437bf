//! Structural analysis
//!
//!     [`Analyzer::analyze`] is the entry point. It probes the dialect once, then derives:
//!     - the heading outline (depth-capped) and the level-2 section split
//!     - word count and reading time
//!     - semantic components (benefits, process steps, testimonials, FAQ, key takeaways)
//!     - CTA placement suggestions and SEO signals
//!
//!     Everything is returned in one [`ContentAnalysisResult`], the handoff artifact for
//!     downstream collaborators. Each extractor is also usable on its own.

pub mod cta;
pub mod detectors;
pub mod format;
pub mod headings;
pub mod lines;
pub mod sections;
pub mod seo;
pub mod text;

pub use cta::{cta_placements, CtaPlacement, CtaPosition};
pub use detectors::{
    detect_benefits, detect_faq_items, detect_key_takeaways, detect_process_steps,
    detect_testimonials, BenefitItem, FaqItem, ProcessStep, Testimonial,
};
pub use format::{markdown_view, DocumentFormat};
pub use headings::{extract_headings, HeadingItem};
pub use sections::{extract_sections, ArticleSection};
pub use seo::{analyze_seo, SeoData};
pub use text::{count_words, reading_time, slugify};

use crate::config::AnalysisConfig;
use log::debug;
use serde::{Deserialize, Serialize};

/// Deepest heading level HTML and Markdown can express.
const FULL_DEPTH: u8 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysisResult {
    pub format: DocumentFormat,
    pub headings: Vec<HeadingItem>,
    pub sections: Vec<ArticleSection>,
    pub word_count: usize,
    pub reading_time: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<BenefitItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_steps: Option<Vec<ProcessStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_items: Option<Vec<FaqItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<Vec<String>>,
    pub cta_placements: Vec<CtaPlacement>,
    pub seo_data: SeoData,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Override the heading depth cap from the configuration.
    pub fn with_max_heading_depth(mut self, depth: u8) -> Self {
        self.config.max_heading_depth = depth;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, content: &str, title: Option<&str>) -> ContentAnalysisResult {
        let format = DocumentFormat::detect(content);
        let headings = extract_headings(content, format, self.config.max_heading_depth);
        let outline = extract_headings(content, format, FULL_DEPTH);
        let sections = extract_sections(content, format);
        let word_count = count_words(content, format);

        let markdown = markdown_view(content, format);
        let result = ContentAnalysisResult {
            format,
            headings,
            word_count,
            reading_time: reading_time(word_count, self.config.words_per_minute),
            benefits: detect_benefits(&markdown),
            process_steps: detect_process_steps(&markdown),
            testimonials: detect_testimonials(&markdown),
            faq_items: detect_faq_items(&markdown),
            key_takeaways: detect_key_takeaways(&markdown),
            cta_placements: cta_placements(&sections, &markdown),
            seo_data: analyze_seo(&outline, title),
            sections,
        };

        debug!(
            "analyzed {:?} content: {} headings, {} sections, {} words",
            format,
            result.headings.len(),
            result.sections.len(),
            result.word_count
        );
        result
    }
}

/// Analyze with the default configuration.
pub fn analyze_content(content: &str, title: Option<&str>) -> ContentAnalysisResult {
    Analyzer::default().analyze(content, title)
}
