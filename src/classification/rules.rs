//! Per-template rule tables
//!
//!     Each rule is an independent (predicate, weight, reason) triple. A template's score is the
//!     sum of the weights of the rules that fire; rules never look at each other.

use super::profile::ContentProfile;
use super::PageTemplate;
use crate::detection::ComponentType;

pub struct Rule {
    pub weight: u32,
    pub reason: &'static str,
    pub applies: fn(&ContentProfile) -> bool,
}

impl Rule {
    const fn new(weight: u32, reason: &'static str, applies: fn(&ContentProfile) -> bool) -> Self {
        Self {
            weight,
            reason,
            applies,
        }
    }
}

static BLOG_ARTICLE: [Rule; 5] = [
    Rule::new(3, "Three or more content sections", |p| {
        p.count(ComponentType::ContentSection) >= 3
    }),
    Rule::new(3, "Author box present", |p| p.has(ComponentType::AuthorBox)),
    Rule::new(2, "Table of contents present", |p| p.has(ComponentType::Toc)),
    Rule::new(1, "Key takeaways present", |p| {
        p.has(ComponentType::KeyTakeaways)
    }),
    Rule::new(1, "FAQ section present", |p| p.has(ComponentType::Faq)),
];

static LANDING_PAGE: [Rule; 3] = [
    Rule::new(4, "Two or more calls to action", |p| {
        p.count(ComponentType::Cta) >= 2
    }),
    Rule::new(3, "Hero section present", |p| p.has(ComponentType::Hero)),
    Rule::new(2, "Social proof vocabulary", |p| p.social_proof),
];

static ECOMMERCE_PRODUCT: [Rule; 3] = [
    Rule::new(3, "Two or more tables (specifications)", |p| {
        p.count(ComponentType::Table) >= 2
    }),
    Rule::new(3, "Price mentioned", |p| p.price_mentions > 0),
    Rule::new(2, "Purchase vocabulary", |p| p.add_to_cart),
];

static ECOMMERCE_CATEGORY: [Rule; 3] = [
    Rule::new(3, "Three or more lists and images", |p| {
        p.count(ComponentType::List) >= 3 && p.count(ComponentType::Image) >= 3
    }),
    Rule::new(3, "Three or more prices", |p| p.price_mentions >= 3),
    Rule::new(2, "Category vocabulary", |p| p.category),
];

static SERVICE_PAGE: [Rule; 4] = [
    Rule::new(4, "Consultation vocabulary", |p| p.consultation),
    Rule::new(2, "Services vocabulary", |p| p.services),
    Rule::new(1, "Call to action without a hero", |p| {
        p.has(ComponentType::Cta) && !p.has(ComponentType::Hero)
    }),
    Rule::new(2, "Process vocabulary", |p| p.process),
];

/// Rules for `template`, in evaluation order.
pub fn rules(template: PageTemplate) -> &'static [Rule] {
    match template {
        PageTemplate::BlogArticle => &BLOG_ARTICLE,
        PageTemplate::LandingPage => &LANDING_PAGE,
        PageTemplate::EcommerceProduct => &ECOMMERCE_PRODUCT,
        PageTemplate::EcommerceCategory => &ECOMMERCE_CATEGORY,
        PageTemplate::ServicePage => &SERVICE_PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn profile(counts: &[(ComponentType, usize)]) -> ContentProfile {
        ContentProfile {
            counts: counts.iter().copied().collect(),
            ..ContentProfile::default()
        }
    }

    fn fired(template: PageTemplate, profile: &ContentProfile) -> Vec<&'static str> {
        rules(template)
            .iter()
            .filter(|rule| (rule.applies)(profile))
            .map(|rule| rule.reason)
            .collect()
    }

    #[test]
    fn test_every_template_has_rules() {
        for template in PageTemplate::ALL {
            assert!(!rules(template).is_empty());
            assert!(rules(template).iter().all(|rule| rule.weight > 0));
        }
    }

    #[rstest]
    #[case(ComponentType::ContentSection, 2, 0)]
    #[case(ComponentType::ContentSection, 3, 1)]
    #[case(ComponentType::AuthorBox, 1, 1)]
    fn test_blog_rules(
        #[case] ty: ComponentType,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        let p = profile(&[(ty, count)]);
        assert_eq!(fired(PageTemplate::BlogArticle, &p).len(), expected);
    }

    #[test]
    fn test_cta_without_hero_is_service_evidence() {
        let with_hero = profile(&[(ComponentType::Cta, 1), (ComponentType::Hero, 1)]);
        let without = profile(&[(ComponentType::Cta, 1)]);
        assert!(fired(PageTemplate::ServicePage, &with_hero).is_empty());
        assert_eq!(
            fired(PageTemplate::ServicePage, &without),
            vec!["Call to action without a hero"]
        );
    }

    #[test]
    fn test_category_needs_lists_and_images() {
        let lists_only = profile(&[(ComponentType::List, 4)]);
        assert!(fired(PageTemplate::EcommerceCategory, &lists_only).is_empty());
        let both = profile(&[(ComponentType::List, 3), (ComponentType::Image, 3)]);
        assert_eq!(fired(PageTemplate::EcommerceCategory, &both).len(), 1);
    }
}
