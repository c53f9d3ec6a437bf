//! Semantic assembly
//!
//!     Turns structured inputs and raw Markdown back into schema.org-annotated markup.
//!     - [`builder`]: the per-page [`SemanticBuilder`] accumulator
//!     - [`markdown`]: the forgiving Markdown → HTML converter
//!     - [`jsonld`]: JSON-LD documents for the schema-bearing components
//!     - [`render`]: a full page from a [`ContentAnalysisResult`](crate::analysis::ContentAnalysisResult)

pub mod builder;
pub mod escape;
pub mod jsonld;
pub mod markdown;
pub mod options;
pub mod render;

pub use builder::SemanticBuilder;
pub use escape::{escape_html, safe_url};
pub use markdown::{markdown_to_html, render_inline};
pub use options::{
    ArticleOptions, AuthorOptions, BenefitsOptions, CtaOptions, FaqOptions, HeroOptions, Image,
    KeyTakeawaysOptions, Link, Source, SourcesOptions, TestimonialsOptions, TimelineOptions,
    TocOptions,
};
pub use render::{render_analysis, RenderOptions};
