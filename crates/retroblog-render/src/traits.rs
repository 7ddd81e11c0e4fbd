//! Trait for article listing and lookup.
//!
//! [`ArticleProvider`] is what the page models are built from. The catalog
//! implements it; a page layer that wraps the catalog (caching, feature
//! flags, drafts in a preview build) can implement it too.

use retroblog_catalog::{Catalog, SearchFilter};
use retroblog_core::Result;
use serde::Serialize;

use crate::views::{DetailView, PreviewCard};

/// Listing and lookup over a set of articles.
///
/// # Example
///
/// ```
/// use retroblog_catalog::Catalog;
/// use retroblog_core::ContentRecord;
/// use retroblog_render::ArticleProvider;
///
/// let catalog = Catalog::from_records(vec![ContentRecord::new(
///     "1", "remote-icebreakers", "Remote Icebreakers", "Warm-ups.", "<p/>",
/// )])
/// .unwrap();
///
/// assert_eq!(catalog.list_articles("remote").unwrap().len(), 1);
/// assert!(catalog.get_article("missing").unwrap_err().is_not_found());
/// ```
pub trait ArticleProvider: Send + Sync {
    /// Summary type returned when listing.
    type Summary<'a>: Serialize
    where
        Self: 'a;

    /// Detail type returned for a single article.
    type Detail<'a>: Serialize
    where
        Self: 'a;

    /// Articles matching `query`, in editorial order. An empty query lists all.
    fn list_articles(&self, query: &str) -> Result<Vec<Self::Summary<'_>>>;

    /// The article with `slug`.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` when no article has that slug.
    fn get_article(&self, slug: &str) -> Result<Self::Detail<'_>>;

    /// Total number of articles.
    fn count(&self) -> Result<usize> {
        Ok(self.list_articles("")?.len())
    }

    /// Returns the content type name (e.g., "article").
    fn content_type_name(&self) -> &str {
        "article"
    }

    /// Returns the plural content type name (e.g., "articles").
    fn content_type_name_plural(&self) -> &str {
        "articles"
    }
}

impl ArticleProvider for Catalog {
    type Summary<'a> = PreviewCard<'a>;
    type Detail<'a> = DetailView<'a>;

    fn list_articles(&self, query: &str) -> Result<Vec<PreviewCard<'_>>> {
        Ok(SearchFilter::new(query)
            .apply(self.all())
            .into_iter()
            .map(PreviewCard::from)
            .collect())
    }

    fn get_article(&self, slug: &str) -> Result<DetailView<'_>> {
        self.find_by_slug(slug).map(DetailView::from)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
