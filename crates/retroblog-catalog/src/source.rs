//! TOML-authored content sources.
//!
//! Each document holds one or more `[[article]]` tables in editorial order:
//!
//! ```toml
//! [[article]]
//! id = "101"
//! slug = "start-stop-continue"
//! title = "Start Stop Continue"
//! excerpt = "The simplest retro format."
//! search_keywords = "templates, agile"
//! published_date = "March 4, 2024"
//! read_time = "5 min read"
//! image_alt_text = "Sticky notes in three columns"
//! body = '''<p>...</p>'''
//! structured_data = '''{"@context": "https://schema.org", "@type": "Article"}'''
//!
//! [[article.faqs]]
//! question = "How long should it take?"
//! answer = "About 45 minutes."
//! ```
//!
//! `structured_data` is a JSON string; its text is kept exactly as written.

use std::borrow::Cow;

use log::debug;
use retroblog_core::{ContentRecord, ContentSource, Error, Faq, Markup, Result, StructuredData};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default, rename = "article")]
    articles: Vec<ArticleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArticleEntry {
    id: String,
    slug: String,
    title: String,
    excerpt: String,
    body: String,
    #[serde(default)]
    search_keywords: String,
    #[serde(default)]
    published_date: String,
    #[serde(default)]
    read_time: String,
    image_alt_text: Option<String>,
    #[serde(default)]
    faqs: Vec<Faq>,
    structured_data: Option<String>,
}

/// A content source backed by one TOML document.
#[derive(Debug, Clone)]
pub struct TomlSource {
    name: String,
    text: Cow<'static, str>,
}

impl TomlSource {
    /// Wrap a compiled-in document (usually from `include_str!`).
    pub fn new(name: impl Into<String>, text: &'static str) -> Self {
        Self {
            name: name.into(),
            text: Cow::Borrowed(text),
        }
    }

    /// Wrap an owned document.
    pub fn from_string(name: impl Into<String>, text: String) -> Self {
        Self {
            name: name.into(),
            text: Cow::Owned(text),
        }
    }

    fn to_record(&self, entry: ArticleEntry) -> Result<ContentRecord> {
        let structured_data = entry
            .structured_data
            .as_deref()
            .map(|json| {
                StructuredData::from_json_str(json).map_err(|e| {
                    Error::content(
                        &self.name,
                        format!("article '{}': structured_data is not valid JSON: {e}", entry.id),
                    )
                })
            })
            .transpose()?;

        Ok(ContentRecord {
            id: entry.id,
            slug: entry.slug,
            title: entry.title,
            excerpt: entry.excerpt,
            body: Markup::new(entry.body),
            search_keywords: entry.search_keywords,
            published_date: entry.published_date,
            read_time: entry.read_time,
            image_alt_text: entry.image_alt_text,
            faqs: entry.faqs,
            structured_data,
        })
    }
}

impl ContentSource for TomlSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Result<Vec<ContentRecord>> {
        let document: Document =
            toml::from_str(&self.text).map_err(|e| Error::content(&self.name, e.to_string()))?;
        debug!(
            "Parsed {} articles from '{}'",
            document.articles.len(),
            self.name
        );
        document
            .articles
            .into_iter()
            .map(|entry| self.to_record(entry))
            .collect()
    }
}
