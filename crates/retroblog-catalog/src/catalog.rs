//! The ordered, immutable article catalog.
//!
//! A [`Catalog`] is assembled once by a [`CatalogBuilder`] from any number
//! of [`ContentSource`]s and loose records, concatenated in the order they
//! were added. After [`CatalogBuilder::build`] succeeds nothing can change
//! it; callers only ever receive shared references.

use std::collections::HashMap;

use log::debug;
use retroblog_core::{ContentRecord, ContentSource, Error, IdentifierKind, Result};

/// Ordered, read-only collection of content records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ContentRecord>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Start assembling a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog straight from records in editorial order.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogBuilder::build`].
    pub fn from_records(records: Vec<ContentRecord>) -> Result<Self> {
        Self::builder().records(records).build()
    }

    /// Every record, in authored order.
    pub fn all(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Iterate records in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    /// Look up a record by exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no record has `slug`. This is the
    /// page layer's "404" case, not a fault.
    pub fn find_by_slug(&self, slug: &str) -> Result<&ContentRecord> {
        self.by_slug
            .get(slug)
            .map(|&index| &self.records[index])
            .ok_or_else(|| Error::not_found(format!("no article with slug '{slug}'")))
    }

    /// Look up a record by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no record has `id`.
    pub fn find_by_id(&self, id: &str) -> Result<&ContentRecord> {
        self.by_id
            .get(id)
            .map(|&index| &self.records[index])
            .ok_or_else(|| Error::not_found(format!("no article with id '{id}'")))
    }

    /// Slugs in authored order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.slug.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects sources and records, then validates them into a [`Catalog`].
///
/// Sources are read lazily by [`build`](Self::build), so the first error
/// (from any source or record) aborts the whole build.
#[derive(Default)]
pub struct CatalogBuilder {
    parts: Vec<Part>,
}

enum Part {
    Source(Box<dyn ContentSource>),
    Records(Vec<ContentRecord>),
}

impl CatalogBuilder {
    /// Append every record of `source`.
    pub fn source(mut self, source: impl ContentSource + 'static) -> Self {
        self.parts.push(Part::Source(Box::new(source)));
        self
    }

    /// Append one record.
    pub fn record(self, record: ContentRecord) -> Self {
        self.records(vec![record])
    }

    /// Append several records.
    pub fn records(mut self, records: Vec<ContentRecord>) -> Self {
        self.parts.push(Part::Records(records));
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// # Errors
    ///
    /// - [`Error::Content`] (or any source error) if a source fails to load
    /// - [`Error::InvalidRecord`] if a record breaks a field rule
    /// - [`Error::DuplicateIdentifier`] if an `id` or `slug` repeats
    pub fn build(self) -> Result<Catalog> {
        let mut records = Vec::new();
        for part in self.parts {
            match part {
                Part::Source(source) => {
                    let loaded = source.records()?;
                    debug!("Loaded {} records from source '{}'", loaded.len(), source.name());
                    records.extend(loaded);
                }
                Part::Records(loose) => records.extend(loose),
            }
        }

        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_slug = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            record.validate()?;
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(Error::duplicate(IdentifierKind::Id, &record.id));
            }
            if by_slug.insert(record.slug.clone(), index).is_some() {
                return Err(Error::duplicate(IdentifierKind::Slug, &record.slug));
            }
        }

        debug!("Catalog built with {} records", records.len());
        Ok(Catalog {
            records,
            by_slug,
            by_id,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, slug: &str, title: &str) -> ContentRecord {
        ContentRecord::new(id, slug, title, format!("{title} excerpt"), "<p>body</p>")
    }

    struct FailingSource;

    impl ContentSource for FailingSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn records(&self) -> Result<Vec<ContentRecord>> {
            Err(Error::content("broken", "unreadable"))
        }
    }

    #[test]
    fn test_all_preserves_authored_order() {
        let catalog = Catalog::builder()
            .record(record("3", "zeta", "Zeta"))
            .record(record("1", "alpha", "Alpha"))
            .record(record("2", "mid", "Mid"))
            .build()
            .unwrap();
        let ids: Vec<&str> = catalog.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sources_concatenate_in_order() {
        let first = vec![record("1", "a", "A"), record("2", "b", "B")];
        let second = vec![record("3", "c", "C")];
        let catalog = Catalog::builder()
            .source(first)
            .record(record("9", "z", "Z"))
            .source(second)
            .build()
            .unwrap();
        let slugs: Vec<&str> = catalog.slugs().collect();
        assert_eq!(slugs, vec!["a", "b", "z", "c"]);
    }

    #[test]
    fn test_find_by_slug_round_trips() {
        let catalog =
            Catalog::from_records(vec![record("1", "a", "A"), record("2", "b", "B")]).unwrap();
        for original in catalog.all() {
            let found = catalog.find_by_slug(&original.slug).unwrap();
            assert_eq!(found, original);
        }
    }

    #[test]
    fn test_find_by_slug_missing_is_not_found() {
        let catalog = Catalog::from_records(vec![record("1", "a", "A")]).unwrap();
        let err = catalog.find_by_slug("nonexistent-slug").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nonexistent-slug"));
    }

    #[test]
    fn test_find_by_slug_is_exact() {
        let catalog = Catalog::from_records(vec![record("1", "remote", "Remote")]).unwrap();
        assert!(catalog.find_by_slug("Remote").is_err());
        assert!(catalog.find_by_slug("remote ").is_err());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::from_records(vec![record("id-7", "seven", "Seven")]).unwrap();
        assert_eq!(catalog.find_by_id("id-7").unwrap().slug, "seven");
        assert!(catalog.find_by_id("seven").unwrap_err().is_not_found());
    }

    #[test]
    fn test_slug_and_id_are_distinct_namespaces() {
        let catalog =
            Catalog::from_records(vec![record("a", "b", "First"), record("b", "a", "Second")])
                .unwrap();
        assert_eq!(catalog.find_by_slug("a").unwrap().title, "Second");
        assert_eq!(catalog.find_by_id("a").unwrap().title, "First");
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let err = Catalog::from_records(vec![record("1", "same", "A"), record("2", "same", "B")])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateIdentifier {
                kind: IdentifierKind::Slug,
                ref value,
            } if value == "same"
        ));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let err =
            Catalog::from_records(vec![record("1", "a", "A"), record("1", "b", "B")]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateIdentifier {
                kind: IdentifierKind::Id,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_across_sources_fails() {
        let err = Catalog::builder()
            .source(vec![record("1", "a", "A")])
            .source(vec![record("2", "a", "B")])
            .build()
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_record_fails() {
        let mut bad = record("1", "a", "A");
        bad.title.clear();
        let err = Catalog::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
    }

    #[test]
    fn test_source_error_propagates() {
        let err = Catalog::builder()
            .record(record("1", "a", "A"))
            .source(FailingSource)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Content { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.all().is_empty());
    }

    #[test]
    fn test_into_iterator() {
        let catalog =
            Catalog::from_records(vec![record("1", "a", "A"), record("2", "b", "B")]).unwrap();
        let titles: Vec<&str> = (&catalog).into_iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(catalog.iter().count(), 2);
    }

    #[test]
    fn test_catalog_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
