//! Page models for the listing and article pages.
//!
//! [`Renderer`] combines the catalog's [`ArticleProvider`] impl with a
//! [`SiteConfig`] to produce everything one page needs. The listing page is
//! rebuilt from scratch on every query change; there is no incremental state.

use log::debug;
use retroblog_catalog::Catalog;
use retroblog_core::{Result, SiteConfig};
use serde::Serialize;

use crate::traits::ArticleProvider;
use crate::views::{DetailView, FaqBlock, PreviewCard, StructuredDataTag};

// ============================================================================
// Page models
// ============================================================================

/// The listing page for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<'a> {
    /// The query as typed.
    pub query: String,
    /// Matching cards in catalog order.
    pub cards: Vec<PreviewCard<'a>>,
}

impl ListingPage<'_> {
    /// True when nothing matched and the empty state should be shown.
    pub fn is_empty_state(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Everything an article page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPage<'a> {
    /// The article and its hero flag.
    pub view: DetailView<'a>,
    /// FAQ block, when the article has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faqs: Option<FaqBlock<'a>>,
    /// Head-region metadata, when the article has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredDataTag<'a>>,
    /// Link back to the listing page.
    pub listing_href: String,
}

/// The "no such article" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundPage {
    /// The slug that was requested.
    pub slug: String,
    /// Message for the reader.
    pub message: String,
    /// Link back to the listing page.
    pub listing_href: String,
}

/// Outcome of resolving a slug to a page.
///
/// Distinguishes a missing article from an article with sparse content, so
/// the page layer can render a 404-style view instead of an empty article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Lookup<'a> {
    /// The slug resolved to an article.
    Found(DetailPage<'a>),
    /// No article has the slug.
    NotFound(NotFoundPage),
}

impl<'a> Lookup<'a> {
    /// Whether the slug resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The detail page, if found.
    pub fn found(&self) -> Option<&DetailPage<'a>> {
        match self {
            Self::Found(page) => Some(page),
            Self::NotFound(_) => None,
        }
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Builds page models from the catalog and a site layout.
pub struct Renderer<'a, S> {
    catalog: &'a Catalog,
    site: S,
}

impl<'a, S: SiteConfig> Renderer<'a, S> {
    /// Create a renderer over `catalog`.
    pub fn new(catalog: &'a Catalog, site: S) -> Self {
        Self { catalog, site }
    }

    /// The site layout in use.
    pub fn site(&self) -> &S {
        &self.site
    }

    /// Build the listing page for `query`.
    pub fn listing(&self, query: &str) -> Result<ListingPage<'a>> {
        let cards: Vec<PreviewCard<'a>> = self
            .catalog
            .list_articles(query)?
            .into_iter()
            .map(|card| {
                let href = self.site.article_path(card.slug);
                card.with_href(href)
            })
            .collect();
        Ok(ListingPage {
            query: query.to_string(),
            cards,
        })
    }

    /// Resolve `slug` to a detail or not-found page.
    ///
    /// # Errors
    ///
    /// Only errors other than "not found" are returned; a missing slug is
    /// [`Lookup::NotFound`].
    pub fn detail(&self, slug: &str) -> Result<Lookup<'a>> {
        let listing_href = self.site.listing_path().to_string();
        match self.catalog.get_article(slug) {
            Ok(view) => Ok(Lookup::Found(DetailPage {
                faqs: FaqBlock::for_record(view.article),
                structured_data: StructuredDataTag::for_record(view.article),
                view,
                listing_href,
            })),
            Err(err) if err.is_not_found() => {
                debug!("No article for slug '{slug}'");
                Ok(Lookup::NotFound(NotFoundPage {
                    slug: slug.to_string(),
                    message: "We couldn't find that article.".to_string(),
                    listing_href,
                }))
            }
            Err(err) => Err(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
