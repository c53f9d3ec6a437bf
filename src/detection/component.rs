//! Detected component model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Recurring semantic content blocks the detector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    KeyTakeaways,
    Faq,
    Toc,
    Cta,
    AuthorBox,
    Hero,
    Image,
    Table,
    List,
    ContentSection,
}

impl ComponentType {
    /// Order in which types claim regions of the content. Earlier types win overlaps.
    pub const SPECIFICITY_ORDER: [ComponentType; 10] = [
        ComponentType::KeyTakeaways,
        ComponentType::Faq,
        ComponentType::Toc,
        ComponentType::AuthorBox,
        ComponentType::Cta,
        ComponentType::Hero,
        ComponentType::Table,
        ComponentType::Image,
        ComponentType::List,
        ComponentType::ContentSection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::KeyTakeaways => "key-takeaways",
            ComponentType::Faq => "faq",
            ComponentType::Toc => "toc",
            ComponentType::Cta => "cta",
            ComponentType::AuthorBox => "author-box",
            ComponentType::Hero => "hero",
            ComponentType::Image => "image",
            ComponentType::Table => "table",
            ComponentType::List => "list",
            ComponentType::ContentSection => "content-section",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::SPECIFICITY_ORDER
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("Unknown component type '{s}'"))
    }
}

/// A component found in the content.
///
/// `start_index`/`end_index` are byte offsets into the content that was matched (after any
/// truncation) and always fall on char boundaries. `content` holds the matched text cut to the
/// configured snippet length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub start_index: usize,
    pub end_index: usize,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl DetectedComponent {
    pub fn new(component_type: ComponentType, start_index: usize, end_index: usize) -> Self {
        Self {
            component_type,
            start_index,
            end_index,
            content: String::new(),
            metadata: None,
        }
    }

    pub fn with_content(mut self, matched: &str, snippet_length: usize) -> Self {
        self.content = truncate_chars(matched, snippet_length);
        self
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Half-open interval overlap.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start_index < end && start < self.end_index
    }
}

/// Keep at most `max` chars of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Largest char boundary in `text` that is `<= idx`.
pub(crate) fn floor_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut boundary = idx;
    while !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}
