//! The semantic markup builder
//!
//!     [`SemanticBuilder`] accumulates markup fragments and JSON-LD documents for one page.
//!     Every `build_*` call renders its explicit inputs, appends one fragment and, for the
//!     schema-bearing components, one JSON-LD document. Calls chain:
//!
//!         builder.build_hero(&hero).build_toc(&toc).build_article(&article);
//!
//!     One builder belongs to one page build. Call [`SemanticBuilder::reset`] before reusing it.
//!
//!     Class names follow `{prefix}-{block}` / `{prefix}-{block}__{element}` so the external
//!     stylesheet can key on them.

use super::escape::{escape_html, safe_url};
use super::jsonld;
use super::markdown::{markdown_to_html, render_inline};
use super::options::{
    ArticleOptions, AuthorOptions, BenefitsOptions, CtaOptions, FaqOptions, HeroOptions,
    KeyTakeawaysOptions, SourcesOptions, TestimonialsOptions, TimelineOptions, TocOptions,
};
use crate::analysis::ArticleSection;
use crate::config::AssemblyConfig;
use serde_json::Value;

const SCHEMA: &str = "https://schema.org";

#[derive(Debug, Clone)]
pub struct SemanticBuilder {
    class_prefix: String,
    fragments: Vec<String>,
    json_ld: Vec<Value>,
}

impl Default for SemanticBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticBuilder {
    pub fn new() -> Self {
        Self::with_class_prefix(AssemblyConfig::default().class_prefix)
    }

    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: prefix.into(),
            fragments: Vec::new(),
            json_ld: Vec::new(),
        }
    }

    pub fn from_config(config: &AssemblyConfig) -> Self {
        Self::with_class_prefix(config.class_prefix.clone())
    }

    /// Drop every fragment and JSON-LD document. The class prefix is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.fragments.clear();
        self.json_ld.clear();
        self
    }

    /// The accumulated markup, one fragment per line.
    pub fn html(&self) -> String {
        self.fragments.join("\n")
    }

    pub fn json_ld_documents(&self) -> &[Value] {
        &self.json_ld
    }

    /// Every JSON-LD document as a `<script type="application/ld+json">` block.
    pub fn json_ld_scripts(&self) -> String {
        self.json_ld
            .iter()
            .map(jsonld::script)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn block(&self, block: &str) -> String {
        format!("{}-{}", self.class_prefix, block)
    }

    fn element(&self, block: &str, element: &str) -> String {
        format!("{}-{}__{}", self.class_prefix, block, element)
    }

    fn push(&mut self, fragment: String) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    pub fn build_hero(&mut self, options: &HeroOptions) -> &mut Self {
        let mut html = format!("<header class=\"{}\">", self.block("hero"));
        html.push_str(&format!(
            "<h1 class=\"{}\">{}</h1>",
            self.element("hero", "title"),
            escape_html(&options.title)
        ));
        if let Some(subtitle) = &options.subtitle {
            html.push_str(&format!(
                "<p class=\"{}\">{}</p>",
                self.element("hero", "subtitle"),
                render_inline(subtitle)
            ));
        }
        if let Some(image) = &options.image {
            html.push_str(&format!(
                "<img class=\"{}\" src=\"{}\" alt=\"{}\">",
                self.element("hero", "image"),
                safe_url(&image.src),
                escape_html(&image.alt)
            ));
        }
        if let Some(cta) = &options.cta {
            html.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                self.element("hero", "cta"),
                safe_url(&cta.url),
                escape_html(&cta.text)
            ));
        }
        html.push_str("</header>");
        self.push(html)
    }

    /// Article shell with Article microdata; each section is rendered as by
    /// [`SemanticBuilder::build_section`].
    pub fn build_article(&mut self, options: &ArticleOptions) -> &mut Self {
        self.open_article(options);
        for section in &options.sections {
            self.build_section(section);
        }
        self.close_article()
    }

    pub(crate) fn open_article(&mut self, options: &ArticleOptions) -> &mut Self {
        let mut html = format!(
            "<article class=\"{}\" itemscope itemtype=\"{SCHEMA}/Article\">",
            self.block("article")
        );
        let tag = if options.headline_in_hero { "p" } else { "h1" };
        html.push_str(&format!(
            "<header class=\"{}\"><{tag} itemprop=\"headline\">{}</{tag}>",
            self.element("article", "header"),
            escape_html(&options.title)
        ));
        if let Some(description) = &options.description {
            html.push_str(&format!(
                "<p class=\"{}\" itemprop=\"description\">{}</p>",
                self.element("article", "description"),
                escape_html(description)
            ));
        }
        if let Some(author) = &options.author {
            html.push_str(&format!(
                "<span class=\"{}\" itemprop=\"author\" itemscope itemtype=\"{SCHEMA}/Person\">\
                 <span itemprop=\"name\">{}</span></span>",
                self.element("article", "author"),
                escape_html(author)
            ));
        }
        if let Some(date) = &options.date_published {
            let date = escape_html(date);
            html.push_str(&format!(
                "<time class=\"{}\" itemprop=\"datePublished\" datetime=\"{date}\">{date}</time>",
                self.element("article", "date")
            ));
        }
        html.push_str("</header>");
        html.push_str(&format!(
            "<div class=\"{}\" itemprop=\"articleBody\">",
            self.element("article", "body")
        ));
        self.json_ld.push(jsonld::article(options));
        self.push(html)
    }

    pub(crate) fn close_article(&mut self) -> &mut Self {
        self.push("</div></article>".to_string())
    }

    /// One section: the intro renders without a heading, every other section as a `<section>`
    /// whose heading level follows the section level.
    pub fn build_section(&mut self, section: &ArticleSection) -> &mut Self {
        let body = markdown_to_html(&section.content);
        let html = if section.is_intro() {
            format!("<div class=\"{}\">{body}</div>", self.block("intro"))
        } else {
            let level = section.level.clamp(1, 6);
            format!(
                "<section class=\"{}\" id=\"{}\"><h{level} class=\"{}\">{}</h{level}>{body}</section>",
                self.block("section"),
                escape_html(&section.id),
                self.element("section", "heading"),
                escape_html(&section.heading)
            )
        };
        self.push(html)
    }

    /// Nothing is rendered for an empty item list.
    pub fn build_key_takeaways(&mut self, options: &KeyTakeawaysOptions) -> &mut Self {
        if options.items.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("Key takeaways");
        let items: String = options
            .items
            .iter()
            .map(|item| {
                format!(
                    "<li class=\"{}\">{}</li>",
                    self.element("key-takeaways", "item"),
                    render_inline(item)
                )
            })
            .collect();
        let html = format!(
            "<aside class=\"{}\"><h2 class=\"{}\">{}</h2><ul class=\"{}\">{items}</ul></aside>",
            self.block("key-takeaways"),
            self.element("key-takeaways", "title"),
            escape_html(title),
            self.element("key-takeaways", "list")
        );
        self.push(html)
    }

    pub fn build_benefits(&mut self, options: &BenefitsOptions) -> &mut Self {
        if options.items.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("Benefits");
        let items: String = options
            .items
            .iter()
            .map(|item| {
                let description = if item.description.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<p class=\"{}\">{}</p>",
                        self.element("benefits", "description"),
                        render_inline(&item.description)
                    )
                };
                format!(
                    "<div class=\"{}\"><h3 class=\"{}\">{}</h3>{description}</div>",
                    self.element("benefits", "item"),
                    self.element("benefits", "title"),
                    escape_html(&item.title)
                )
            })
            .collect();
        let html = format!(
            "<section class=\"{}\"><h2 class=\"{}\">{}</h2><div class=\"{}\">{items}</div></section>",
            self.block("benefits"),
            self.element("benefits", "heading"),
            escape_html(title),
            self.element("benefits", "grid")
        );
        self.push(html)
    }

    /// Numbered steps with HowTo microdata and a HowTo JSON-LD document.
    pub fn build_timeline(&mut self, options: &TimelineOptions) -> &mut Self {
        if options.steps.is_empty() {
            return self;
        }
        let mut html = format!(
            "<section class=\"{}\" itemscope itemtype=\"{SCHEMA}/HowTo\"><h2 class=\"{}\" itemprop=\"name\">{}</h2>",
            self.block("timeline"),
            self.element("timeline", "title"),
            escape_html(&options.title)
        );
        if let Some(description) = &options.description {
            html.push_str(&format!(
                "<p class=\"{}\" itemprop=\"description\">{}</p>",
                self.element("timeline", "description"),
                escape_html(description)
            ));
        }
        html.push_str(&format!("<ol class=\"{}\">", self.element("timeline", "steps")));
        for step in &options.steps {
            html.push_str(&format!(
                "<li class=\"{}\" itemprop=\"step\" itemscope itemtype=\"{SCHEMA}/HowToStep\">\
                 <meta itemprop=\"position\" content=\"{n}\">\
                 <span class=\"{}\">{n}</span>\
                 <h3 class=\"{}\" itemprop=\"name\">{}</h3>",
                self.element("timeline", "step"),
                self.element("timeline", "number"),
                self.element("timeline", "step-title"),
                escape_html(&step.title),
                n = step.number,
            ));
            if !step.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"{}\" itemprop=\"text\">{}</p>",
                    self.element("timeline", "step-text"),
                    render_inline(&step.description)
                ));
            }
            html.push_str("</li>");
        }
        html.push_str("</ol></section>");
        self.json_ld.push(jsonld::how_to(options));
        self.push(html)
    }

    /// Testimonial grid with Review microdata; the reviews share one JSON-LD `@graph`.
    pub fn build_testimonials(&mut self, options: &TestimonialsOptions) -> &mut Self {
        if options.items.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("What our customers say");
        let mut html = format!(
            "<section class=\"{}\"><h2 class=\"{}\">{}</h2><div class=\"{}\">",
            self.block("testimonials"),
            self.element("testimonials", "title"),
            escape_html(title),
            self.element("testimonials", "grid")
        );
        for item in &options.items {
            let role = item
                .role
                .as_deref()
                .map(|role| {
                    format!(
                        ", <span class=\"{}\" itemprop=\"jobTitle\">{}</span>",
                        self.element("testimonials", "role"),
                        escape_html(role)
                    )
                })
                .unwrap_or_default();
            html.push_str(&format!(
                "<figure class=\"{}\" itemscope itemtype=\"{SCHEMA}/Review\">\
                 <blockquote class=\"{}\" itemprop=\"reviewBody\">{}</blockquote>\
                 <figcaption class=\"{}\" itemprop=\"author\" itemscope itemtype=\"{SCHEMA}/Person\">\
                 <span itemprop=\"name\">{}</span>{role}</figcaption></figure>",
                self.element("testimonials", "item"),
                self.element("testimonials", "quote"),
                escape_html(&item.quote),
                self.element("testimonials", "author"),
                escape_html(&item.author),
            ));
        }
        html.push_str("</div></section>");
        self.json_ld.push(jsonld::reviews(options));
        self.push(html)
    }

    pub fn build_cta(&mut self, options: &CtaOptions) -> &mut Self {
        let mut html = format!(
            "<section class=\"{}\"><h2 class=\"{}\">{}</h2>",
            self.block("cta"),
            self.element("cta", "title"),
            escape_html(&options.title)
        );
        if let Some(text) = &options.text {
            html.push_str(&format!(
                "<p class=\"{}\">{}</p>",
                self.element("cta", "text"),
                render_inline(text)
            ));
        }
        html.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>",
            self.element("cta", "button"),
            safe_url(&options.button.url),
            escape_html(&options.button.text)
        ));
        if let Some(secondary) = &options.secondary {
            html.push_str(&format!(
                "<a class=\"{} {}\" href=\"{}\">{}</a>",
                self.element("cta", "button"),
                self.element("cta", "button--secondary"),
                safe_url(&secondary.url),
                escape_html(&secondary.text)
            ));
        }
        html.push_str("</section>");
        self.push(html)
    }

    /// FAQ block with FAQPage microdata and a FAQPage JSON-LD document.
    pub fn build_faq(&mut self, options: &FaqOptions) -> &mut Self {
        if options.items.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("Frequently asked questions");
        let mut html = format!(
            "<section class=\"{}\" itemscope itemtype=\"{SCHEMA}/FAQPage\"><h2 class=\"{}\">{}</h2>",
            self.block("faq"),
            self.element("faq", "title"),
            escape_html(title)
        );
        for item in &options.items {
            html.push_str(&format!(
                "<div class=\"{}\" itemscope itemprop=\"mainEntity\" itemtype=\"{SCHEMA}/Question\">\
                 <h3 class=\"{}\" itemprop=\"name\">{}</h3>\
                 <div class=\"{}\" itemscope itemprop=\"acceptedAnswer\" itemtype=\"{SCHEMA}/Answer\">\
                 <div itemprop=\"text\">{}</div></div></div>",
                self.element("faq", "item"),
                self.element("faq", "question"),
                escape_html(&item.question),
                self.element("faq", "answer"),
                render_inline(&item.answer)
            ));
        }
        html.push_str("</section>");
        self.json_ld.push(jsonld::faq_page(options));
        self.push(html)
    }

    /// Flat list of anchor links; nesting is expressed with a level modifier class.
    pub fn build_toc(&mut self, options: &TocOptions) -> &mut Self {
        if options.headings.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("Table of contents");
        let items: String = options
            .headings
            .iter()
            .map(|heading| {
                let item = self.element("toc", "item");
                format!(
                    "<li class=\"{item} {item}--level-{}\"><a href=\"#{}\">{}</a></li>",
                    heading.level,
                    escape_html(&heading.id),
                    escape_html(&heading.text)
                )
            })
            .collect();
        let html = format!(
            "<nav class=\"{}\" aria-label=\"{}\"><h2 class=\"{}\">{}</h2><ol class=\"{}\">{items}</ol></nav>",
            self.block("toc"),
            escape_html(title),
            self.element("toc", "title"),
            escape_html(title),
            self.element("toc", "list")
        );
        self.push(html)
    }

    /// Author box with Person microdata and a Person JSON-LD document.
    pub fn build_author_box(&mut self, options: &AuthorOptions) -> &mut Self {
        let mut html = format!(
            "<aside class=\"{}\" itemscope itemtype=\"{SCHEMA}/Person\">",
            self.block("author-box")
        );
        if let Some(image) = &options.image {
            html.push_str(&format!(
                "<img class=\"{}\" itemprop=\"image\" src=\"{}\" alt=\"{}\">",
                self.element("author-box", "image"),
                safe_url(&image.src),
                escape_html(&image.alt)
            ));
        }
        let name = escape_html(&options.name);
        let name = match &options.url {
            Some(url) => format!("<a itemprop=\"url\" href=\"{}\">{name}</a>", safe_url(url)),
            None => name,
        };
        html.push_str(&format!(
            "<p class=\"{}\" itemprop=\"name\">{name}</p>",
            self.element("author-box", "name")
        ));
        if let Some(job_title) = &options.job_title {
            html.push_str(&format!(
                "<p class=\"{}\" itemprop=\"jobTitle\">{}</p>",
                self.element("author-box", "job-title"),
                escape_html(job_title)
            ));
        }
        if let Some(bio) = &options.bio {
            html.push_str(&format!(
                "<p class=\"{}\" itemprop=\"description\">{}</p>",
                self.element("author-box", "bio"),
                render_inline(bio)
            ));
        }
        html.push_str("</aside>");
        self.json_ld.push(jsonld::person_profile(options));
        self.push(html)
    }

    pub fn build_sources(&mut self, options: &SourcesOptions) -> &mut Self {
        if options.sources.is_empty() {
            return self;
        }
        let title = options.title.as_deref().unwrap_or("Sources");
        let items: String = options
            .sources
            .iter()
            .map(|source| {
                let publisher = source
                    .publisher
                    .as_deref()
                    .map(|p| {
                        format!(
                            " <span class=\"{}\">{}</span>",
                            self.element("sources", "publisher"),
                            escape_html(p)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    "<li class=\"{}\"><a href=\"{}\" rel=\"nofollow noopener\" target=\"_blank\">{}</a>{publisher}</li>",
                    self.element("sources", "item"),
                    safe_url(&source.url),
                    escape_html(&source.title)
                )
            })
            .collect();
        let html = format!(
            "<section class=\"{}\"><h2 class=\"{}\">{}</h2><ol class=\"{}\">{items}</ol></section>",
            self.block("sources"),
            self.element("sources", "title"),
            escape_html(title),
            self.element("sources", "list")
        );
        self.push(html)
    }
}
