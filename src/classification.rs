//! Page template classification
//!
//!     Runs the component detector, folds the resulting [`ContentProfile`] through each
//!     template's rule table and recommends the best-scoring template. Purely advisory: the
//!     confidence is the winning score over a fixed assumed maximum, clamped to `[0, 1]`.

pub mod profile;
pub mod rules;

pub use profile::ContentProfile;
pub use rules::{rules, Rule};

use crate::config::{ClassificationConfig, DetectionConfig};
use crate::detection::Detector;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page-layout intents, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageTemplate {
    BlogArticle,
    LandingPage,
    EcommerceProduct,
    EcommerceCategory,
    ServicePage,
}

impl PageTemplate {
    pub const ALL: [PageTemplate; 5] = [
        PageTemplate::BlogArticle,
        PageTemplate::LandingPage,
        PageTemplate::EcommerceProduct,
        PageTemplate::EcommerceCategory,
        PageTemplate::ServicePage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageTemplate::BlogArticle => "blog-article",
            PageTemplate::LandingPage => "landing-page",
            PageTemplate::EcommerceProduct => "ecommerce-product",
            PageTemplate::EcommerceCategory => "ecommerce-category",
            PageTemplate::ServicePage => "service-page",
        }
    }
}

impl fmt::Display for PageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageTemplate::ALL
            .iter()
            .copied()
            .find(|template| template.as_str() == s)
            .ok_or_else(|| format!("Unknown page template '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateScore {
    pub template: PageTemplate,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSuggestion {
    pub template: PageTemplate,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub scores: Vec<TemplateScore>,
}

/// Score every template against `profile`, in [`PageTemplate::ALL`] order.
pub fn score_templates(profile: &ContentProfile) -> Vec<TemplateScore> {
    PageTemplate::ALL
        .iter()
        .map(|&template| {
            let fired: Vec<&Rule> = rules(template)
                .iter()
                .filter(|rule| (rule.applies)(profile))
                .collect();
            TemplateScore {
                template,
                score: fired.iter().map(|rule| rule.weight).sum(),
                reasons: fired.iter().map(|rule| rule.reason.to_string()).collect(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    detector: Detector,
    config: ClassificationConfig,
}

impl Classifier {
    pub fn new(detection: DetectionConfig, config: ClassificationConfig) -> Self {
        Self {
            detector: Detector::new(detection),
            config,
        }
    }

    pub fn suggest(&self, content: &str) -> TemplateSuggestion {
        let components = self.detector.detect(content);
        let profile = ContentProfile::new(content, &components);
        self.suggest_from_profile(&profile)
    }

    pub fn suggest_from_profile(&self, profile: &ContentProfile) -> TemplateSuggestion {
        let scores = score_templates(profile);

        // Strictly greater, so ties keep the earlier template.
        let best = scores
            .iter()
            .fold(None::<&TemplateScore>, |best, candidate| match best {
                Some(current) if candidate.score <= current.score => Some(current),
                _ => Some(candidate),
            });

        let suggestion = match best {
            Some(best) if best.score > 0 => TemplateSuggestion {
                template: best.template,
                confidence: self.confidence(best.score),
                reasons: best.reasons.clone(),
                scores: scores.clone(),
            },
            _ => TemplateSuggestion {
                template: PageTemplate::BlogArticle,
                confidence: 0.0,
                reasons: vec!["No template-specific signals; defaulting to blog article".into()],
                scores,
            },
        };

        debug!(
            "suggested template {} with confidence {:.2}",
            suggestion.template, suggestion.confidence
        );
        suggestion
    }

    fn confidence(&self, score: u32) -> f64 {
        (f64::from(score) / f64::from(self.config.max_score.max(1))).clamp(0.0, 1.0)
    }
}

/// Recommend a page template for `content` with the default configuration.
pub fn suggest_template_from_content(content: &str) -> TemplateSuggestion {
    Classifier::default().suggest(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::ComponentType;

    fn profile(counts: &[(ComponentType, usize)]) -> ContentProfile {
        ContentProfile {
            counts: counts.iter().copied().collect(),
            ..ContentProfile::default()
        }
    }

    #[test]
    fn test_template_round_trips_through_str() {
        for template in PageTemplate::ALL {
            assert_eq!(template.as_str().parse::<PageTemplate>(), Ok(template));
        }
        assert!("wiki".parse::<PageTemplate>().is_err());
    }

    #[test]
    fn test_ties_go_to_first_template() {
        // Blog: author box (3). Product: price (3).
        let mut p = profile(&[(ComponentType::AuthorBox, 1)]);
        p.price_mentions = 1;
        let suggestion = Classifier::default().suggest_from_profile(&p);
        assert_eq!(suggestion.template, PageTemplate::BlogArticle);
        assert!((suggestion.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_no_signals_defaults_to_blog() {
        let suggestion = Classifier::default().suggest_from_profile(&ContentProfile::default());
        assert_eq!(suggestion.template, PageTemplate::BlogArticle);
        assert_eq!(suggestion.confidence, 0.0);
        assert_eq!(suggestion.reasons.len(), 1);
        assert_eq!(suggestion.scores.len(), 5);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let mut p = profile(&[
            (ComponentType::Cta, 3),
            (ComponentType::Hero, 1),
        ]);
        p.social_proof = true;
        p.consultation = true;
        let suggestion = Classifier::default().suggest_from_profile(&p);
        assert_eq!(suggestion.template, PageTemplate::LandingPage);
        assert!((suggestion.confidence - 0.9).abs() < 1e-9);

        let strict = Classifier::new(
            DetectionConfig::default(),
            ClassificationConfig { max_score: 5 },
        );
        assert_eq!(strict.suggest_from_profile(&p).confidence, 1.0);
    }

    #[test]
    fn test_score_reasons_match_fired_rules() {
        let scores = score_templates(&profile(&[(ComponentType::ContentSection, 4)]));
        assert_eq!(scores[0].template, PageTemplate::BlogArticle);
        assert_eq!(scores[0].score, 3);
        assert_eq!(scores[0].reasons, vec!["Three or more content sections"]);
        assert!(scores[1..].iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_suggest_on_blog_content() {
        let content = "# Growing tomatoes\n\n\
            A short guide to growing tomatoes at home.\n\n\
            ## Choosing seeds\nPick a variety that suits your climate.\n\n\
            ## Planting\nPlant after the last frost.\n\n\
            ## Watering\nWater deeply, not often.\n\n\
            ## About the author\nJane has gardened for twenty years.\n";
        let suggestion = suggest_template_from_content(content);
        assert_eq!(suggestion.template, PageTemplate::BlogArticle);
        assert!(suggestion.confidence >= 0.5);
    }
}
