//! # pagesmith
//!
//! Document structure analysis and semantic assembly for generated articles.
//!
//!     Content arrives as loosely structured Markdown or HTML. The crate finds the recurring
//!     page components in it, derives the document outline and SEO signals, recommends a page
//!     template, and assembles schema.org-annotated markup back out of the result.
//!
//! Architecture
//!
//!     .
//!     ├── detection        # pattern library, component detector, linear fast path
//!     ├── analysis         # headings, sections, metrics, semantic detectors, CTA rules, SEO
//!     ├── classification   # page template rule tables and scoring
//!     ├── assembly         # markup builder, Markdown converter, JSON-LD
//!     ├── config.rs        # layered TOML configuration
//!     └── error.rs
//!
//!     Apart from [`config::Loader`] layering TOML files, the lib does no I/O and never prints.
//!     The `pagesmith` binary is the only shell-aware piece.
//!
//! Quick use
//!
//! ```ignore
//! let components = pagesmith::detect_components(&content);
//! let analysis = pagesmith::analyze_content(&content, Some("Title"));
//! let suggestion = pagesmith::suggest_template_from_content(&content);
//! ```

pub mod analysis;
pub mod assembly;
pub mod classification;
pub mod config;
pub mod detection;
pub mod error;

pub use analysis::{analyze_content, Analyzer, ContentAnalysisResult, DocumentFormat};
pub use assembly::{markdown_to_html, SemanticBuilder};
pub use classification::{suggest_template_from_content, PageTemplate, TemplateSuggestion};
pub use config::{load_defaults, Loader, PagesmithConfig};
pub use detection::{
    detect_component_by_type, detect_components, has_component, ComponentType,
    DetectedComponent, Detector,
};
pub use error::{Error, Result};
