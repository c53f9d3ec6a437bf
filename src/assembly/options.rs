//! Structured inputs for the `build_*` calls
//!
//!     Every option struct deserializes from camelCase JSON so host collaborators can hand
//!     them over as-is. Optional fields left out render nothing.

use crate::analysis::{ArticleSection, BenefitItem, FaqItem, HeadingItem, ProcessStep, Testimonial};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroOptions {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<Image>,
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleOptions {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    /// ISO 8601 date.
    pub date_published: Option<String>,
    pub sections: Vec<ArticleSection>,
    pub keywords: Vec<String>,
    /// A hero above the article already carries the page `<h1>`; the headline is then
    /// rendered as a paragraph.
    pub headline_in_hero: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyTakeawaysOptions {
    pub title: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsOptions {
    pub title: Option<String>,
    pub items: Vec<BenefitItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineOptions {
    pub title: String,
    pub description: Option<String>,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsOptions {
    pub title: Option<String>,
    pub items: Vec<Testimonial>,
    /// Name of the organization or product under review.
    pub item_reviewed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaOptions {
    pub title: String,
    pub text: Option<String>,
    pub button: Link,
    pub secondary: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqOptions {
    pub title: Option<String>,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TocOptions {
    pub title: Option<String>,
    pub headings: Vec<HeadingItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorOptions {
    pub name: String,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub image: Option<Image>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourcesOptions {
    pub title: Option<String>,
    pub sources: Vec<Source>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_camel_case_json() {
        let json = r#"{
            "title": "Start today",
            "button": { "text": "Sign up", "url": "/signup" }
        }"#;
        let cta: CtaOptions = serde_json::from_str(json).unwrap();
        assert_eq!(cta.button, Link::new("Sign up", "/signup"));
        assert_eq!(cta.text, None);

        let article: ArticleOptions =
            serde_json::from_str(r#"{"title": "T", "datePublished": "2024-05-01"}"#).unwrap();
        assert_eq!(article.date_published.as_deref(), Some("2024-05-01"));
        assert!(article.sections.is_empty());
    }
}
