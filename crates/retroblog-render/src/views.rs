//! Projections of a single record.
//!
//! All views borrow from the catalog; nothing is copied except derived
//! values such as links and flags.

use retroblog_core::{ContentRecord, Faq, StructuredData};
use serde::Serialize;

// ============================================================================
// Preview card
// ============================================================================

/// Data for one card on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCard<'a> {
    /// Record id.
    pub id: &'a str,
    /// Record slug.
    pub slug: &'a str,
    /// Display title.
    pub title: &'a str,
    /// Summary text.
    pub excerpt: &'a str,
    /// Reading time label.
    pub read_time: &'a str,
    /// Publication date label.
    pub published_date: &'a str,
    /// Link to the article page, when a site layout is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl<'a> PreviewCard<'a> {
    /// Attach the article link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl<'a> From<&'a ContentRecord> for PreviewCard<'a> {
    fn from(record: &'a ContentRecord) -> Self {
        Self {
            id: &record.id,
            slug: &record.slug,
            title: &record.title,
            excerpt: &record.excerpt,
            read_time: &record.read_time,
            published_date: &record.published_date,
            href: None,
        }
    }
}

// ============================================================================
// Detail view
// ============================================================================

/// The full record for an article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    /// The complete record, body included.
    pub article: &'a ContentRecord,
    /// Whether the hero image region is shown.
    pub has_hero_image: bool,
}

impl<'a> From<&'a ContentRecord> for DetailView<'a> {
    fn from(record: &'a ContentRecord) -> Self {
        Self {
            article: record,
            has_hero_image: record.has_hero_image(),
        }
    }
}

// ============================================================================
// FAQ block
// ============================================================================

/// Ordered question/answer pairs, rendered as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FaqBlock<'a> {
    items: &'a [Faq],
}

impl<'a> FaqBlock<'a> {
    /// The block for `record`, or `None` when it has no FAQs.
    pub fn for_record(record: &'a ContentRecord) -> Option<Self> {
        if record.faqs.is_empty() {
            None
        } else {
            Some(Self {
                items: &record.faqs,
            })
        }
    }

    /// Entries in authored order.
    pub fn items(&self) -> &'a [Faq] {
        self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a block built by [`for_record`](Self::for_record).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Structured data tag
// ============================================================================

/// Structured metadata for the document head.
///
/// The payload is emitted byte-for-byte; no escaping or reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StructuredDataTag<'a> {
    data: &'a StructuredData,
}

impl<'a> StructuredDataTag<'a> {
    /// MIME type of the embedded script.
    pub const MIME_TYPE: &'static str = "application/ld+json";

    /// The tag for `record`, or `None` when it carries no structured data.
    pub fn for_record(record: &'a ContentRecord) -> Option<Self> {
        record.structured_data.as_ref().map(|data| Self { data })
    }

    /// The payload exactly as authored.
    pub fn json(&self) -> &'a str {
        self.data.as_str()
    }

    /// The complete `<script>` element for the head region.
    pub fn to_html(&self) -> String {
        format!(
            "<script type=\"{}\">{}</script>",
            Self::MIME_TYPE,
            self.data.as_str()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
