//! Listing-page search filter.
//!
//! A record matches when the lowercased query is a substring of its
//! lowercased `title` or lowercased `search_keywords`. Nothing else is
//! searched: not the body, not the excerpt, not the FAQs.
//!
//! Filtering only removes records; the survivors keep their catalog order.
//! An empty query keeps everything, and no match is just an empty result.
//!
//! # Example
//!
//! ```
//! use retroblog_catalog::SearchFilter;
//! use retroblog_core::ContentRecord;
//!
//! let records = vec![
//!     ContentRecord::new("1", "a", "Start Stop Continue", "x", "<p/>").with_keywords("agile"),
//!     ContentRecord::new("2", "b", "Remote Icebreakers", "x", "<p/>").with_keywords("zoom"),
//! ];
//!
//! let hits = SearchFilter::new("AGILE").apply(&records);
//! assert_eq!(hits[0].id, "1");
//! assert!(SearchFilter::new("zzz").apply(&records).is_empty());
//! ```

use log::trace;
use retroblog_core::ContentRecord;

/// A prepared, case-folded query.
///
/// The query text is used as typed: surrounding spaces are part of the
/// substring being searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Prepare a filter for `query`.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True when the filter lets everything through.
    pub fn is_pass_through(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `record` matches on title or keywords.
    pub fn matches(&self, record: &ContentRecord) -> bool {
        if self.is_pass_through() {
            return true;
        }
        record.title.to_lowercase().contains(&self.needle)
            || record.search_keywords.to_lowercase().contains(&self.needle)
    }

    /// Keep the matching records of `source`, in source order.
    pub fn apply<'a, I>(&self, source: I) -> Vec<&'a ContentRecord>
    where
        I: IntoIterator<Item = &'a ContentRecord>,
    {
        let hits: Vec<&ContentRecord> = source.into_iter().filter(|r| self.matches(r)).collect();
        trace!("Query {:?} matched {} records", self.needle, hits.len());
        hits
    }
}

/// Filter `source` by `query`. Shorthand for `SearchFilter::new(query).apply(source)`.
pub fn filter<'a, I>(query: &str, source: I) -> Vec<&'a ContentRecord>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    SearchFilter::new(query).apply(source)
}

// ============================================================================
// Tests
// ============================================================================
