//! The content record: one authored article.
//!
//! A [`ContentRecord`] carries everything the page layer needs to render an
//! article: display strings, an opaque markup body, optional FAQs, and an
//! optional structured-data payload for search engines.
//!
//! Two payloads are opaque to Retroblog:
//!
//! - [`Markup`] — the article body (HTML). Never parsed, only forwarded.
//! - [`StructuredData`] — SEO metadata (JSON-LD). Checked for JSON
//!   well-formedness once, then forwarded as the exact same text.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::{Error, Result};

// ============================================================================
// Opaque payloads
// ============================================================================

/// Opaque article body markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a markup string.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup exactly as authored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the body is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Markup {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque structured metadata, held as verbatim JSON text.
///
/// The payload is never re-serialized: [`as_str`](Self::as_str) and the
/// `Serialize` impl both emit the bytes captured at construction.
#[derive(Debug, Clone)]
pub struct StructuredData(Box<RawValue>);

impl StructuredData {
    /// Capture a JSON document. Fails only if `json` is not well-formed JSON.
    ///
    /// Surrounding whitespace is not part of the JSON value and is dropped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw = RawValue::from_string(json.trim().to_owned())?;
        Ok(Self(raw))
    }

    /// Capture an already-parsed value. It is serialized once here.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Ok(Self(serde_json::value::to_raw_value(value)?))
    }

    /// The JSON text exactly as captured.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Parse a copy of the payload for callers that need to inspect it.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(self.0.get())?)
    }
}

impl PartialEq for StructuredData {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StructuredData {}

impl Serialize for StructuredData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for StructuredData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FAQ
// ============================================================================

/// A question/answer pair shown under an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// The question, as displayed.
    pub question: String,
    /// The answer, as displayed.
    pub answer: String,
}

impl Faq {
    /// Create a new FAQ entry.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

// ============================================================================
// ContentRecord
// ============================================================================

/// One article in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Stable unique identifier, assigned at authoring time.
    pub id: String,
    /// URL-safe unique identifier used by the router.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short summary shown on cards.
    pub excerpt: String,
    /// Article body markup.
    pub body: Markup,
    /// Extra search terms, not displayed.
    pub search_keywords: String,
    /// Display-only publication date.
    pub published_date: String,
    /// Display-only reading time (e.g. "5 min read").
    pub read_time: String,
    /// Alt text for the hero image; its presence enables the hero region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt_text: Option<String>,
    /// Ordered FAQ entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    /// SEO payload forwarded verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

impl ContentRecord {
    /// Create a record with the required fields; everything else is empty.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        body: impl Into<Markup>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            body: body.into(),
            search_keywords: String::new(),
            published_date: String::new(),
            read_time: String::new(),
            image_alt_text: None,
            faqs: Vec::new(),
            structured_data: None,
        }
    }

    /// Set the search keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.search_keywords = keywords.into();
        self
    }

    /// Set the display publication date.
    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = date.into();
        self
    }

    /// Set the display reading time.
    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }

    /// Set the hero image alt text.
    pub fn with_image_alt_text(mut self, alt: impl Into<String>) -> Self {
        self.image_alt_text = Some(alt.into());
        self
    }

    /// Append one FAQ entry.
    pub fn with_faq(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.faqs.push(Faq::new(question, answer));
        self
    }

    /// Attach the structured-data payload.
    pub fn with_structured_data(mut self, data: StructuredData) -> Self {
        self.structured_data = Some(data);
        self
    }

    /// Whether a hero image region should be shown.
    pub fn has_hero_image(&self) -> bool {
        self.image_alt_text
            .as_deref()
            .is_some_and(|alt| !alt.trim().is_empty())
    }

    /// Check the per-record invariants.
    ///
    /// Uniqueness of `id`/`slug` is a catalog-level rule and is checked by
    /// the catalog builder, not here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] naming the first rule that fails.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(Error::invalid_record(&self.id, reason));

        if self.id.trim().is_empty() {
            return fail("id is empty");
        }
        if self.slug.is_empty() {
            return fail("slug is empty");
        }
        if !is_url_safe_slug(&self.slug) {
            return Err(Error::invalid_record(
                &self.id,
                format!("slug '{}' is not URL-safe", self.slug),
            ));
        }
        if self.title.trim().is_empty() {
            return fail("title is empty");
        }
        if self.excerpt.trim().is_empty() {
            return fail("excerpt is empty");
        }
        if self.body.is_blank() {
            return fail("body is empty");
        }
        for (index, faq) in self.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
                return Err(Error::invalid_record(
                    &self.id,
                    format!("faq #{} has an empty question or answer", index + 1),
                ));
            }
        }
        Ok(())
    }
}

/// Lowercase ASCII letters and digits separated by single hyphens.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

// ============================================================================
// Tests
// ============================================================================
