//! schema.org JSON-LD documents
//!
//!     One document per schema-bearing component. Documents are plain `serde_json::Value`s;
//!     [`script`] wraps one for inlining by the host page.

use super::options::{ArticleOptions, AuthorOptions, FaqOptions, TestimonialsOptions, TimelineOptions};
use serde_json::{json, Map, Value};

const CONTEXT: &str = "https://schema.org";

fn document(schema_type: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), json!(CONTEXT));
    map.insert("@type".into(), json!(schema_type));
    map
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        map.insert(key.into(), json!(value));
    }
}

fn person(name: &str, job_title: Option<&str>) -> Value {
    let mut map = Map::new();
    map.insert("@type".into(), json!("Person"));
    map.insert("name".into(), json!(name));
    insert_opt(&mut map, "jobTitle", job_title);
    Value::Object(map)
}

pub fn article(options: &ArticleOptions) -> Value {
    let mut doc = document("Article");
    doc.insert("headline".into(), json!(options.title));
    insert_opt(&mut doc, "description", options.description.as_deref());
    insert_opt(&mut doc, "datePublished", options.date_published.as_deref());
    if let Some(author) = options.author.as_deref() {
        doc.insert("author".into(), person(author, None));
    }
    let sections: Vec<&str> = options
        .sections
        .iter()
        .filter(|s| !s.is_intro())
        .map(|s| s.heading.as_str())
        .collect();
    if !sections.is_empty() {
        doc.insert("articleSection".into(), json!(sections));
    }
    if !options.keywords.is_empty() {
        doc.insert("keywords".into(), json!(options.keywords.join(", ")));
    }
    Value::Object(doc)
}

pub fn how_to(options: &TimelineOptions) -> Value {
    let mut doc = document("HowTo");
    doc.insert("name".into(), json!(options.title));
    insert_opt(&mut doc, "description", options.description.as_deref());
    let steps: Vec<Value> = options
        .steps
        .iter()
        .map(|step| {
            let mut map = Map::new();
            map.insert("@type".into(), json!("HowToStep"));
            map.insert("position".into(), json!(step.number));
            map.insert("name".into(), json!(step.title));
            insert_opt(&mut map, "text", Some(step.description.as_str()));
            Value::Object(map)
        })
        .collect();
    doc.insert("step".into(), Value::Array(steps));
    Value::Object(doc)
}

/// Reviews go into one `@graph` document.
pub fn reviews(options: &TestimonialsOptions) -> Value {
    let graph: Vec<Value> = options
        .items
        .iter()
        .map(|item| {
            let mut map = Map::new();
            map.insert("@type".into(), json!("Review"));
            map.insert("reviewBody".into(), json!(item.quote));
            map.insert("author".into(), person(&item.author, item.role.as_deref()));
            if let Some(reviewed) = options.item_reviewed.as_deref() {
                map.insert(
                    "itemReviewed".into(),
                    json!({ "@type": "Organization", "name": reviewed }),
                );
            }
            Value::Object(map)
        })
        .collect();
    json!({ "@context": CONTEXT, "@graph": graph })
}

pub fn faq_page(options: &FaqOptions) -> Value {
    let mut doc = document("FAQPage");
    let entities: Vec<Value> = options
        .items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": { "@type": "Answer", "text": item.answer },
            })
        })
        .collect();
    doc.insert("mainEntity".into(), Value::Array(entities));
    Value::Object(doc)
}

pub fn person_profile(options: &AuthorOptions) -> Value {
    let mut doc = document("Person");
    doc.insert("name".into(), json!(options.name));
    insert_opt(&mut doc, "jobTitle", options.job_title.as_deref());
    insert_opt(&mut doc, "description", options.bio.as_deref());
    insert_opt(&mut doc, "image", options.image.as_ref().map(|i| i.src.as_str()));
    insert_opt(&mut doc, "url", options.url.as_deref());
    Value::Object(doc)
}

/// `<script type="application/ld+json">` block for one document.
///
/// `</` is escaped so the JSON cannot close the script element early.
pub fn script(document: &Value) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        document.to_string().replace("</", "<\\/")
    )
}
