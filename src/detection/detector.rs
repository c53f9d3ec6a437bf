//! Component detector
//!
//!     Applies the pattern library to content and returns deduplicated, position-sorted
//!     components.
//!
//!     Size gates, in the order they apply:
//!
//!     1. Content above `max_content_length` is cut down to that length (at a char boundary)
//!        before anything runs, or rejected by [`Detector::try_detect`] under the reject policy.
//!     2. Content above `fast_path_threshold` goes to the linear [`fast_path`] scan.
//!     3. Everything else runs the precise path: types in specificity order, each type's patterns
//!        in order, first non-overlapping match wins, capped per type.

use super::component::{floor_char_boundary, ComponentType, DetectedComponent};
use super::fast_path;
use super::patterns::library;
use crate::config::{DetectionConfig, OversizePolicy};
use crate::error::{Error, Result};
use log::{debug, trace};

/// Component detector with explicit size gates.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectionConfig,
}

impl Detector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect every component type. Oversized content is truncated.
    pub fn detect(&self, content: &str) -> Vec<DetectedComponent> {
        let content = self.bounded(content);

        let mut components = if content.len() > self.config.fast_path_threshold {
            debug!(
                "content length {} above fast-path threshold {}, using linear scan",
                content.len(),
                self.config.fast_path_threshold
            );
            fast_path::scan(content, &self.config)
        } else {
            self.detect_precise(content)
        };

        components.sort_by_key(|c| c.start_index);
        components
    }

    /// Like [`Detector::detect`], but honors the oversize policy: under
    /// [`OversizePolicy::Reject`] content above the cap is an error instead of being truncated.
    pub fn try_detect(&self, content: &str) -> Result<Vec<DetectedComponent>> {
        if self.config.oversize_policy == OversizePolicy::Reject
            && content.len() > self.config.max_content_length
        {
            return Err(Error::InputTooLarge {
                len: content.len(),
                max: self.config.max_content_length,
            });
        }
        Ok(self.detect(content))
    }

    /// Precise-path matches for a single type. No fast-path guard.
    pub fn detect_by_type(
        &self,
        content: &str,
        component_type: ComponentType,
    ) -> Vec<DetectedComponent> {
        let content = self.bounded(content);
        let mut accepted = Vec::new();
        self.collect_type(content, component_type, &mut accepted);
        accepted.sort_by_key(|c| c.start_index);
        accepted
    }

    /// Whether any pattern of `component_type` matches. No fast-path guard.
    pub fn has(&self, content: &str, component_type: ComponentType) -> bool {
        let content = self.bounded(content);
        library()
            .patterns(component_type)
            .iter()
            .any(|pattern| pattern.regex.is_match(content))
    }

    fn bounded<'a>(&self, content: &'a str) -> &'a str {
        if content.len() <= self.config.max_content_length {
            return content;
        }
        let cut = floor_char_boundary(content, self.config.max_content_length);
        debug!(
            "truncating content from {} to {} bytes before detection",
            content.len(),
            cut
        );
        &content[..cut]
    }

    fn detect_precise(&self, content: &str) -> Vec<DetectedComponent> {
        let mut accepted = Vec::new();
        for ty in ComponentType::SPECIFICITY_ORDER {
            self.collect_type(content, ty, &mut accepted);
        }
        accepted
    }

    /// Append matches of one type that do not overlap anything already in `accepted`.
    fn collect_type(
        &self,
        content: &str,
        component_type: ComponentType,
        accepted: &mut Vec<DetectedComponent>,
    ) {
        let mut count = 0usize;
        'patterns: for (index, pattern) in library().patterns(component_type).iter().enumerate() {
            for found in pattern.regex.find_iter(content) {
                if count >= self.config.max_matches_per_type {
                    break 'patterns;
                }
                if found.start() == found.end() {
                    continue;
                }
                if accepted
                    .iter()
                    .any(|c| c.overlaps(found.start(), found.end()))
                {
                    continue;
                }

                trace!(
                    "{} matched by {} at {}..{}",
                    component_type,
                    pattern.name,
                    found.start(),
                    found.end()
                );
                accepted.push(
                    DetectedComponent::new(component_type, found.start(), found.end())
                        .with_content(found.as_str(), self.config.snippet_length)
                        .with_metadata("pattern", pattern.name)
                        .with_metadata("patternIndex", index.to_string()),
                );
                count += 1;
            }
        }
    }
}
