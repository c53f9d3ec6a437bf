//! Component detection
//!
//!     Finds recurring semantic blocks (FAQ, CTA, hero, tables, ...) in free-form Markdown or
//!     HTML. See [`detector`] for the size gates and the precise path, [`fast_path`] for the
//!     linear fallback and [`patterns`] for the pattern library itself.
//!
//!     The free functions below use the default [`DetectionConfig`](crate::config::DetectionConfig);
//!     build a [`Detector`] to use other limits.

pub mod component;
pub mod detector;
pub mod fast_path;
pub mod patterns;

pub use component::{ComponentType, DetectedComponent};
pub use detector::Detector;

/// Detect all components with the default limits.
pub fn detect_components(content: &str) -> Vec<DetectedComponent> {
    Detector::default().detect(content)
}

/// Precise-path matches of a single type. Skips the fast-path guard.
pub fn detect_component_by_type(
    content: &str,
    component_type: ComponentType,
) -> Vec<DetectedComponent> {
    Detector::default().detect_by_type(content, component_type)
}

/// Whether `content` contains a component of the given type. Skips the fast-path guard.
pub fn has_component(content: &str, component_type: ComponentType) -> bool {
    Detector::default().has(content, component_type)
}
