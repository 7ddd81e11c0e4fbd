//! Core traits for Retroblog extension points.
//!
//! - [`ContentSource`]: an authored unit that contributes records to the
//!   catalog. The catalog concatenates sources in the order they are added.
//! - [`SiteConfig`]: where the listing and article pages live, so the
//!   rendering layer can build links without knowing the router.

use crate::{ContentRecord, Result};

/// An authored collection of records.
///
/// Sources are read exactly once, while the catalog is being built. The
/// order of the returned records is the editorial order.
///
/// # Example
///
/// ```
/// use retroblog_core::{ContentRecord, ContentSource, Result};
///
/// struct Pinned;
///
/// impl ContentSource for Pinned {
///     fn name(&self) -> &str {
///         "pinned"
///     }
///
///     fn records(&self) -> Result<Vec<ContentRecord>> {
///         Ok(vec![ContentRecord::new(
///             "1",
///             "welcome",
///             "Welcome",
///             "Why we write.",
///             "<p>Hello</p>",
///         )])
///     }
/// }
///
/// assert_eq!(Pinned.records().unwrap().len(), 1);
/// ```
pub trait ContentSource {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// Produce this source's records in authored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source document cannot be read or mapped.
    fn records(&self) -> Result<Vec<ContentRecord>>;
}

impl ContentSource for Vec<ContentRecord> {
    fn name(&self) -> &str {
        "inline"
    }

    fn records(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.clone())
    }
}

/// Site layout used to build links between pages.
///
/// # Bounds
///
/// - `Send + Sync`: configuration is shared by concurrent renderers
/// - `Clone`: cheap duplication for passing to subsystems
pub trait SiteConfig: Send + Sync + Clone + 'static {
    /// Path of the article listing page (e.g. `/blog`).
    fn listing_path(&self) -> &str;

    /// Path of a single article page.
    ///
    /// The default joins the listing path and the slug with one `/`.
    fn article_path(&self, slug: &str) -> String {
        format!("{}/{}", self.listing_path().trim_end_matches('/'), slug)
    }
}
