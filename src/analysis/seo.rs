//! SEO heuristics over the heading outline

use super::headings::HeadingItem;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stop_words::{get, Language};

static STOPWORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    [Language::English, Language::Dutch]
        .into_iter()
        .flat_map(|language| get(language).into_iter())
        .map(|word| word.to_lowercase())
        .collect()
});

const MIN_KEYWORD_CHARS: usize = 3;
const MAX_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    pub h1_count: usize,
    pub has_multiple_h1: bool,
    pub missing_h1: bool,
    pub hierarchy_issues: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
}

fn is_keyword(token: &str) -> bool {
    token.chars().count() >= MIN_KEYWORD_CHARS
        && !token.chars().all(|c| c.is_numeric())
        && !STOPWORDS.contains(token)
}

fn keywords_of(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|token| is_keyword(token))
}

/// Check the outline for H1 problems and level jumps, and pull keywords from the title and
/// headings.
///
/// `headings` should be the full-depth outline; a depth-capped list hides deep jumps.
pub fn analyze_seo(headings: &[HeadingItem], title: Option<&str>) -> SeoData {
    let h1_count = headings.iter().filter(|h| h.level == 1).count();

    let hierarchy_issues = headings
        .windows(2)
        .filter(|pair| pair[1].level > pair[0].level + 1)
        .map(|pair| {
            format!(
                "Heading \"{}\" jumps from h{} to h{}",
                pair[1].text, pair[0].level, pair[1].level
            )
        })
        .collect();

    let title_keywords: Vec<String> = title.map(|t| keywords_of(t).collect()).unwrap_or_default();
    let heading_keywords = headings.iter().flat_map(|h| keywords_of(&h.text));

    let mut seen = HashSet::new();
    let keywords: Vec<String> = title_keywords
        .iter()
        .cloned()
        .chain(heading_keywords)
        .filter(|keyword| seen.insert(keyword.clone()))
        .take(MAX_KEYWORDS)
        .collect();

    let primary_keyword = title_keywords
        .first()
        .cloned()
        .or_else(|| keywords.first().cloned());

    SeoData {
        h1_count,
        has_multiple_h1: h1_count > 1,
        missing_h1: h1_count == 0,
        hierarchy_issues,
        keywords,
        primary_keyword,
    }
}
