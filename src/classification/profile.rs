//! Evidence the classifier scores: component tallies plus a handful of vocabulary signals.

use crate::detection::{ComponentType, DetectedComponent};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[€$£][ \t]?\d{1,6}(?:[.,]\d{1,2})?|\b\d{1,6}(?:[.,]\d{1,2})?[ \t]?(?:eur|euro|usd|dollars?)\b",
    )
    .unwrap()
});
static ADD_TO_CART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:add to cart|add to basket|buy now|in stock|in winkelwagen|in winkelmand|koop nu|bestel nu|op voorraad)\b",
    )
    .unwrap()
});
static CONSULTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:consultation|free quote|request a quote|book a call|schedule a call|adviesgesprek|kennismakingsgesprek|vrijblijvend|offerte|intake)",
    )
    .unwrap()
});
static SERVICES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:our services|services we offer|we offer|onze diensten|diensten|wij bieden|dienstverlening)\b")
        .unwrap()
});
static CATEGORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:shop all|browse|sort by|filter by|all products|category|categorie|collectie|collection|assortiment|bekijk alle)\b",
    )
    .unwrap()
});
static SOCIAL_PROOF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:testimonials?|reviews?|trusted by|what our customers say|klanten zeggen|ervaringen|beoordelingen|\d+\+? (?:happy )?(?:customers|clients|klanten))\b",
    )
    .unwrap()
});
static PROCESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:our process|how it works|how we work|werkwijze|onze aanpak|stappenplan|hoe het werkt|hoe wij werken)\b",
    )
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProfile {
    pub counts: BTreeMap<ComponentType, usize>,
    pub price_mentions: usize,
    pub add_to_cart: bool,
    pub consultation: bool,
    pub services: bool,
    pub category: bool,
    pub social_proof: bool,
    pub process: bool,
}

impl ContentProfile {
    /// Tally `components` and scan `content` for vocabulary signals.
    pub fn new(content: &str, components: &[DetectedComponent]) -> Self {
        let mut counts = BTreeMap::new();
        for component in components {
            *counts.entry(component.component_type).or_insert(0) += 1;
        }
        Self {
            counts,
            price_mentions: PRICE.find_iter(content).count(),
            add_to_cart: ADD_TO_CART.is_match(content),
            consultation: CONSULTATION.is_match(content),
            services: SERVICES.is_match(content),
            category: CATEGORY.is_match(content),
            social_proof: SOCIAL_PROOF.is_match(content),
            process: PROCESS.is_match(content),
        }
    }

    pub fn count(&self, component_type: ComponentType) -> usize {
        self.counts.get(&component_type).copied().unwrap_or(0)
    }

    pub fn has(&self, component_type: ComponentType) -> bool {
        self.count(component_type) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_components() {
        let components = vec![
            DetectedComponent::new(ComponentType::Cta, 0, 5),
            DetectedComponent::new(ComponentType::Cta, 10, 15),
            DetectedComponent::new(ComponentType::Hero, 20, 25),
        ];
        let profile = ContentProfile::new("", &components);
        assert_eq!(profile.count(ComponentType::Cta), 2);
        assert!(profile.has(ComponentType::Hero));
        assert!(!profile.has(ComponentType::AuthorBox));
    }

    #[test]
    fn test_vocabulary_signals() {
        let profile = ContentProfile::new(
            "Only €49,95 or 120 EUR for two. Add to cart now. Plan a free consultation.",
            &[],
        );
        assert_eq!(profile.price_mentions, 2);
        assert!(profile.add_to_cart);
        assert!(profile.consultation);
        assert!(!profile.services);
        assert!(!profile.social_proof);
    }

    #[test]
    fn test_dutch_signals() {
        let profile = ContentProfile::new(
            "Onze diensten. Vraag een vrijblijvend adviesgesprek aan. Bekijk onze werkwijze.",
            &[],
        );
        assert!(profile.services);
        assert!(profile.consultation);
        assert!(profile.process);
    }
}
