//! Pattern library
//!
//!     Every component type owns one to three alternative patterns, tried in the order listed
//!     here. HTML-shape patterns come first since they are the more explicit signal; the
//!     Markdown-shape patterns follow.
//!
//!     All patterns run on the `regex` crate, which guarantees matching in time linear in the
//!     input, so alternation-heavy patterns over free prose cannot blow up. The size-gated fast
//!     path in [`super::fast_path`] is a second line of defense on top of that.
//!
//!     The fast path does not use patterns at all: each type lists literal, lowercase marker
//!     phrases that are searched for with plain substring scans.

use super::component::ComponentType;
use once_cell::sync::Lazy;
use regex::Regex;

/// A named, compiled pattern.
#[derive(Debug)]
pub struct ComponentPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl ComponentPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("component pattern must compile"),
        }
    }
}

/// Compiled pattern sets, indexed by [`ComponentType`].
#[derive(Debug)]
pub struct PatternLibrary {
    key_takeaways: Vec<ComponentPattern>,
    faq: Vec<ComponentPattern>,
    toc: Vec<ComponentPattern>,
    cta: Vec<ComponentPattern>,
    author_box: Vec<ComponentPattern>,
    hero: Vec<ComponentPattern>,
    image: Vec<ComponentPattern>,
    table: Vec<ComponentPattern>,
    list: Vec<ComponentPattern>,
    content_section: Vec<ComponentPattern>,
}

static LIBRARY: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::build);

/// The process-wide pattern library. Compiled on first use.
pub fn library() -> &'static PatternLibrary {
    &LIBRARY
}

impl PatternLibrary {
    fn build() -> Self {
        Self {
            key_takeaways: vec![
                ComponentPattern::new(
                    "html-key-takeaways",
                    r#"(?is)<(?:div|section|aside)\b[^>]*class\s*=\s*["'][^"']*\bkey-takeaways\b[^"']*["'][^>]*>.*?</(?:div|section|aside)>"#,
                ),
                ComponentPattern::new(
                    "markdown-takeaways-heading",
                    r"(?im)^#{2,4}[ \t]+(?:key takeaways|takeaways|tl;?dr|belangrijkste punten|kernpunten|in het kort)\b[^\n]*(?:\n[ \t]*)*(?:\n[ \t]*[-*+][ \t]+[^\n]+)+",
                ),
            ],
            faq: vec![
                ComponentPattern::new(
                    "html-faq",
                    r#"(?is)<(?:div|section)\b[^>]*(?:class\s*=\s*["'][^"']*\bfaq\b[^"']*["']|itemtype\s*=\s*["'][^"']*FAQPage["'])[^>]*>.*?</(?:div|section)>"#,
                ),
                ComponentPattern::new(
                    "markdown-faq-heading",
                    r"(?im)^#{2,3}[ \t]+(?:faq|frequently asked questions|veelgestelde vragen|veel gestelde vragen)\b[^\n]*(?:\n(?:[^#\n][^\n]*|#{3,}[^\n]*)?)*",
                ),
                ComponentPattern::new(
                    "question-answer-pairs",
                    r"(?im)(?:^[ \t]*(?:\*\*)?(?:q|question|vraag)[ \t]*[:.][^\n]*\n(?:[ \t]*\n)*[ \t]*(?:\*\*)?(?:a|answer|antwoord)[ \t]*[:.][^\n]*(?:\n[ \t]*)*)+",
                ),
            ],
            toc: vec![
                ComponentPattern::new(
                    "html-toc",
                    r#"(?is)<(?:nav|div)\b[^>]*class\s*=\s*["'][^"']*\b(?:toc|table-of-contents)\b[^"']*["'][^>]*>.*?</(?:nav|div)>"#,
                ),
                ComponentPattern::new(
                    "markdown-toc-heading",
                    r"(?im)^#{2,3}[ \t]+(?:table of contents|contents|inhoudsopgave|inhoud)[ \t]*(?:\n[ \t]*)*(?:\n[ \t]*(?:[-*+]|\d+\.)[ \t]+[^\n]+)+",
                ),
                ComponentPattern::new(
                    "anchor-link-list",
                    r"(?m)(?:^[ \t]*[-*+][ \t]+\[[^\]\n]+\]\(#[^)\n]+\)[ \t]*(?:\n|\z)){3,}",
                ),
            ],
            author_box: vec![
                ComponentPattern::new(
                    "html-author",
                    r#"(?is)<(?:div|section|aside)\b[^>]*class\s*=\s*["'][^"']*\bauthor[^"']*["'][^>]*>.*?</(?:div|section|aside)>"#,
                ),
                ComponentPattern::new(
                    "markdown-author-heading",
                    r"(?im)^#{2,4}[ \t]+(?:about the author|over de auteur|about me|over mij|author|auteur)[ \t]*(?:\n(?:[^#\n][^\n]*)?)+",
                ),
                ComponentPattern::new(
                    "byline",
                    r"(?m)^[ \t]*(?:\*\*|_)?(?i:written by|geschreven door|by|door)[ \t]+\p{Lu}[^\n]{1,80}$",
                ),
            ],
            cta: vec![
                ComponentPattern::new(
                    "html-cta-block",
                    r#"(?is)<(?:div|section|aside)\b[^>]*class\s*=\s*["'][^"']*\b(?:cta|call-to-action)\b[^"']*["'][^>]*>.*?</(?:div|section|aside)>"#,
                ),
                ComponentPattern::new(
                    "html-button-link",
                    r#"(?is)<a\b[^>]*class\s*=\s*["'][^"']*\b(?:btn|button|cta)\b[^"']*["'][^>]*>.*?</a>"#,
                ),
                ComponentPattern::new(
                    "markdown-action-link",
                    r"(?im)^[ \t]*(?:\*\*|__)?\[[^\]\n]*(?:contact|get started|start|sign up|try|buy|order|book|request|download|subscribe|neem contact|vraag|bestel|probeer|meld je aan|offerte|aanvragen|plan)[^\]\n]*\]\([^)\n]+\)(?:\*\*|__)?[^\n]*$",
                ),
            ],
            hero: vec![
                ComponentPattern::new(
                    "html-hero",
                    r#"(?is)<(?:section|div|header)\b[^>]*class\s*=\s*["'][^"']*\bhero\b[^"']*["'][^>]*>.*?</(?:section|div|header)>"#,
                ),
                ComponentPattern::new(
                    "markdown-title-lead",
                    r"\A[ \t\r\n]*#[ \t]+[^\n]+(?:\n[ \t]*)*\n[^#\n\-*+>|!\s][^\n]*(?:\n[^#\n\-*+>|!\s][^\n]*){0,2}",
                ),
            ],
            image: vec![
                ComponentPattern::new("html-figure", r"(?is)<figure\b[^>]*>.*?</figure>"),
                ComponentPattern::new("html-img", r"(?i)<img\b[^>]*>"),
                ComponentPattern::new("markdown-image", r"!\[[^\]\n]*\]\([^)\n]+\)"),
            ],
            table: vec![
                ComponentPattern::new("html-table", r"(?is)<table\b[^>]*>.*?</table>"),
                ComponentPattern::new(
                    "markdown-table",
                    r"(?m)^[ \t]*\|[^\n]*\|[ \t]*\n[ \t]*\|[ \t:|-]*-[ \t:|-]*(?:\n[ \t]*\|[^\n]*)*",
                ),
            ],
            list: vec![
                ComponentPattern::new("html-list", r"(?is)<(?:ul|ol)\b[^>]*>.*?</(?:ul|ol)>"),
                ComponentPattern::new(
                    "markdown-bullets",
                    r"(?m)(?:^[ \t]*[-*+][ \t]+[^\n]+(?:\n|\z)){2,}",
                ),
                ComponentPattern::new(
                    "markdown-numbered",
                    r"(?m)(?:^[ \t]*\d{1,3}[.)][ \t]+[^\n]+(?:\n|\z)){2,}",
                ),
            ],
            content_section: vec![
                ComponentPattern::new(
                    "html-h2-section",
                    r"(?is)<h2\b[^>]*>.*?</h2>(?:\s*<(?:p|ul|ol|blockquote|figure|table|h3|h4)\b[^>]*>.*?</(?:p|ul|ol|blockquote|figure|table|h3|h4)>)*",
                ),
                ComponentPattern::new(
                    "markdown-h2-section",
                    r"(?m)^##[ \t]+[^\n]+(?:\n(?:[^#\n][^\n]*|#{3,}[^\n]*)?)*",
                ),
            ],
        }
    }

    /// Patterns for one type, in the order they are tried.
    pub fn patterns(&self, component_type: ComponentType) -> &[ComponentPattern] {
        match component_type {
            ComponentType::KeyTakeaways => &self.key_takeaways,
            ComponentType::Faq => &self.faq,
            ComponentType::Toc => &self.toc,
            ComponentType::Cta => &self.cta,
            ComponentType::AuthorBox => &self.author_box,
            ComponentType::Hero => &self.hero,
            ComponentType::Image => &self.image,
            ComponentType::Table => &self.table,
            ComponentType::List => &self.list,
            ComponentType::ContentSection => &self.content_section,
        }
    }
}

/// Lowercase literal phrases the fast path looks for.
///
/// Lists and content sections have no markers; the fast path counts their lines directly.
pub fn fast_path_markers(component_type: ComponentType) -> &'static [&'static str] {
    match component_type {
        ComponentType::KeyTakeaways => &[
            "key takeaways",
            "key-takeaways",
            "belangrijkste punten",
            "kernpunten",
            "tl;dr",
        ],
        ComponentType::Faq => &["faq", "frequently asked questions", "veelgestelde vragen"],
        ComponentType::Toc => &["table of contents", "inhoudsopgave", "class=\"toc"],
        ComponentType::AuthorBox => &[
            "about the author",
            "over de auteur",
            "written by",
            "class=\"author",
        ],
        ComponentType::Cta => &[
            "class=\"cta",
            "call-to-action",
            "get started",
            "contact us",
            "neem contact op",
            "sign up",
            "vraag een offerte",
        ],
        ComponentType::Hero => &["class=\"hero"],
        ComponentType::Table => &["<table"],
        ComponentType::Image => &["<img", "<figure", "!["],
        ComponentType::List | ComponentType::ContentSection => &[],
    }
}
